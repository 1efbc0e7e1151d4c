use crate::graphs::Digraph;
use crate::visits::{depth_first::*, Sequential};
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{Break, Continue};
use thiserror::Error;

/// The digraph has no topological order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The digraph is not acyclic: arc {from} -> {to} closes a cycle")]
pub struct CycleDetected {
    /// The source of the arc closing the cycle.
    pub from: usize,
    /// The target of the arc closing the cycle, which is on the visit path.
    pub to: usize,
}

/// Returns the nodes of the digraph in dependency order, if the digraph is
/// acyclic.
///
/// Nodes are listed in the order in which their depth-first visit is
/// completed: for each arc `u -> v`, `v` comes before `u`, so every node
/// follows all the nodes it can reach. Reversing the result yields a
/// topological sort in the sources-first convention.
///
/// If the visit finds an arc reaching a node on the visit path, it stops and
/// returns the arc, without any partial result.
pub fn top_sort(
    graph: impl Digraph,
    pl: &mut impl ProgressLog,
) -> Result<Box<[usize]>, CycleDetected> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort");

    let mut visit = SeqPath::new(&graph);
    let mut top_sort = Vec::with_capacity(num_nodes);

    let result = visit.visit(1..=num_nodes, |event| {
        match event {
            EventPred::Previsit { .. } => {
                pl.light_update();
            }
            EventPred::Revisit {
                node,
                pred,
                on_stack: true,
                ..
            } => {
                return Break(CycleDetected {
                    from: pred,
                    to: node,
                })
            }
            EventPred::Postvisit { node, .. } => {
                top_sort.push(node);
            }
            _ => (),
        }
        Continue(())
    });

    pl.done();
    match result {
        Break(cycle) => Err(cycle),
        Continue(()) => Ok(top_sort.into_boxed_slice()),
    }
}
