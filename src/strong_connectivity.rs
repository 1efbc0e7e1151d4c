use crate::graphs::Digraph;
use crate::visits::{depth_first::*, Sequential};
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{Break, Continue};

/// Returns whether the digraph is strongly connected.
///
/// This function performs a single depth-first visit from node 1, using the
/// same two stacks as [Gabow's algorithm](crate::sccs::gabow), and stops as
/// soon as the first component is closed. That component is a sink among the
/// components reachable from node 1, not necessarily the component of node 1.
/// The digraph is strongly connected if and only if it contains all `n`
/// nodes. Nodes not reachable from node 1 are never discovered, so in that
/// case the component is necessarily smaller.
///
/// The empty digraph is strongly connected.
pub fn is_strongly_connected(graph: impl Digraph, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return true;
    }

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking strong connectivity...");

    let mut visit = SeqPred::new(&graph);
    let mut open = Vec::with_capacity(16);
    let mut roots: Vec<usize> = Vec::with_capacity(16);
    // Nothing leaves the open stack before the visit stops, so discovery
    // times and positions on the open stack coincide
    let mut id = vec![0; num_nodes].into_boxed_slice();
    let mut remaining = num_nodes;

    let result = visit.visit([1], |event| {
        match event {
            EventPred::Previsit { node, .. } => {
                pl.light_update();
                open.push(node);
                roots.push(open.len());
                id[node - 1] = open.len();
            }
            EventPred::Revisit { node, .. } => {
                while roots.last().is_some_and(|&top| top > id[node - 1]) {
                    roots.pop();
                }
            }
            EventPred::Postvisit { node, .. } => {
                if roots.last() == Some(&id[node - 1]) {
                    while let Some(v) = open.pop() {
                        remaining -= 1;
                        if v == node {
                            break;
                        }
                    }
                    return Break(remaining == 0);
                }
            }
            _ => (),
        }
        Continue(())
    });

    pl.done();
    match result {
        Break(strongly_connected) => strongly_connected,
        // Unreachable, as the root always closes a component
        Continue(()) => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphs::AdjList;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_unreachable() -> anyhow::Result<()> {
        // 1 <-> 2, and 3 -> 1 is not reachable from 1
        let graph = AdjList::from_arcs(3, [(1, 2), (2, 1), (3, 1)])?;
        assert!(!is_strongly_connected(&graph, no_logging![]));
        Ok(())
    }

    #[test]
    fn test_sink_component_first() -> anyhow::Result<()> {
        // Everything is reachable from 1, but {3} closes first
        let graph = AdjList::from_arcs(3, [(1, 2), (2, 1), (2, 3)])?;
        assert!(!is_strongly_connected(&graph, no_logging![]));
        Ok(())
    }

    #[test]
    fn test_single_node() -> anyhow::Result<()> {
        assert!(is_strongly_connected(AdjList::new(vec![vec![]])?, no_logging![]));
        Ok(())
    }
}
