/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::graphs::Digraph;
use crate::visits::{depth_first::*, Sequential};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Gabow's path-based algorithm for strongly connected components.
///
/// The algorithm performs a single depth-first visit keeping two stacks: the
/// visited nodes not yet assigned to a component, in discovery order, and
/// the positions in the first stack of the nodes that might still be roots
/// of a component. An arc to a node that is on the first stack proves that
/// all candidate roots discovered after that node belong to its component,
/// so they are popped from the second stack.
///
/// Runs in time linear in the number of nodes and arcs.
pub fn gabow(graph: impl Digraph, pl: &mut impl ProgressLog) -> Sccs {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut visit = SeqPred::new(&graph);
    let mut open = Vec::with_capacity(16);
    let mut roots: Vec<usize> = Vec::with_capacity(16);
    // While a node is on the open stack, its id is its (1-based) position on
    // the stack, which is at most num_nodes. Component indices start from
    // num_nodes + 1, so the two kinds of ids never collide; they are
    // shifted down at the end.
    let mut id = vec![0; num_nodes].into_boxed_slice();
    let mut count = num_nodes;
    let mut comps = Vec::new();

    visit
        .visit(1..=num_nodes, |event| {
            match event {
                EventPred::Previsit { node, .. } => {
                    pl.light_update();
                    open.push(node);
                    roots.push(open.len());
                    id[node - 1] = open.len();
                }
                EventPred::Revisit { node, .. } => {
                    let id_node = id[node - 1];
                    // Nodes already in a component are ignored
                    if id_node <= num_nodes {
                        while roots.last().is_some_and(|&top| top > id_node) {
                            roots.pop();
                        }
                    }
                }
                EventPred::Postvisit { node, .. } => {
                    if roots.last() == Some(&id[node - 1]) {
                        roots.pop();
                        count += 1;
                        let comp = open.split_off(id[node - 1] - 1).into_boxed_slice();
                        for &v in comp.iter() {
                            id[v - 1] = count;
                        }
                        comps.push(comp);
                    }
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    for node_component in id.iter_mut() {
        *node_component -= num_nodes;
    }

    pl.done();
    Sccs::new(id, comps)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphs::AdjList;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_empty() -> anyhow::Result<()> {
        let sccs = gabow(AdjList::new(vec![])?, no_logging![]);
        assert_eq!(sccs.num_components(), 0);
        assert!(sccs.ids().is_empty());
        Ok(())
    }

    #[test]
    fn test_single_component() -> anyhow::Result<()> {
        let sccs = gabow(AdjList::new(vec![vec![2, 3], vec![1], vec![2]])?, no_logging![]);
        assert_eq!(sccs.num_components(), 1);
        assert_eq!(sccs.ids(), &[1, 1, 1]);
        let mut comp = sccs.components()[0].to_vec();
        comp.sort();
        assert_eq!(comp, vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_emission_order() -> anyhow::Result<()> {
        // Components are emitted in reverse topological order of the
        // condensation, starting from sinks
        let sccs = gabow(
            AdjList::from_arcs(4, [(1, 2), (2, 1), (2, 3), (3, 4), (4, 3)])?,
            no_logging![],
        );
        assert_eq!(sccs.ids(), &[2, 2, 1, 1]);
        Ok(())
    }
}
