use crate::graphs::Digraph;
use crate::visits::{depth_first::*, Sequential, StoppedWhenDone};
use dsi_progress_logger::prelude::*;
use std::ops::ControlFlow::{Break, Continue};

/// Returns whether the digraph is acyclic.
///
/// This method performs a depth-first visit of the digraph, stopping as soon
/// as a cycle is detected, that is, as soon as an arc reaches a node on the
/// visit path. Loops are cycles.
pub fn is_acyclic(graph: impl Digraph, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking acyclicity");

    let mut visit = SeqPath::new(&graph);

    let acyclic = visit.visit(1..=num_nodes, |event| {
        // Stop the visit as soon as a back arc is found.
        match event {
            EventPred::Previsit { .. } => {
                pl.light_update();
                Continue(())
            }
            EventPred::Revisit { on_stack: true, .. } => Break(StoppedWhenDone {}),
            _ => Continue(()),
        }
    });

    pl.done();
    acyclic.is_continue()
}
