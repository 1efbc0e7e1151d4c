use anyhow::Result;
use digraph_algo::graphs::{random::ErdosRenyi, AdjList, Digraph, EdgeList};
use digraph_algo::sccs::gabow;
use dsi_progress_logger::prelude::*;

#[test]
fn test_duplicate_arc() -> Result<()> {
    let mut graph = EdgeList::new(2, vec![1, 1, 2], vec![2, 2, 1])?;
    assert!(!graph.is_simple());
    let adj = graph.build_adjacency(no_logging![]).clone();
    assert_eq!(adj, AdjList::new(vec![vec![2], vec![1]])?);
    // Now answered using the cache: 3 raw arcs, 2 distinct
    assert!(!graph.is_simple());
    Ok(())
}

#[test]
fn test_no_duplicates() -> Result<()> {
    let mut graph = EdgeList::new(3, vec![1, 1, 2, 3], vec![2, 3, 3, 1])?;
    assert!(graph.is_simple());
    graph.build_adjacency(no_logging![]);
    assert!(graph.is_simple());
    assert!(graph.cached_adjacency().is_some_and(AdjList::is_simple));
    Ok(())
}

#[test]
fn test_no_arcs() -> Result<()> {
    let mut graph = EdgeList::new(4, vec![], vec![])?;
    assert!(graph.is_simple());
    let adj = graph.build_adjacency(no_logging![]);
    assert_eq!(adj.num_nodes(), 4);
    assert_eq!(adj.num_arcs(), 0);
    assert!(graph.is_simple());
    Ok(())
}

#[test]
fn test_idempotence() -> Result<()> {
    let mut graph = EdgeList::new(3, vec![1, 1, 1, 3, 3], vec![3, 1, 3, 2, 2])?;
    let first = graph.build_adjacency(no_logging![]).clone();
    let second = graph.build_adjacency(no_logging![]).clone();
    assert_eq!(first, second);
    assert_eq!(first, AdjList::new(vec![vec![1, 3], vec![], vec![2]])?);
    assert_eq!(graph.adjacency(), &first);
    Ok(())
}

#[test]
fn test_sorted_successors() {
    for seed in 0..5 {
        let mut graph = ErdosRenyi::new(40, 0.2, seed).edge_list();
        let adj = graph.build_adjacency(no_logging![]);
        for succ in adj.iter() {
            assert!(succ.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_stale_cache() -> Result<()> {
    let mut graph = EdgeList::new(3, vec![1, 2], vec![2, 3])?;
    let sccs = gabow(graph.adjacency(), no_logging![]);
    assert_eq!(sccs.num_components(), 3);

    graph.push_arc(3, 1)?;
    assert!(graph.cached_adjacency().is_none());
    let sccs = gabow(graph.adjacency(), no_logging![]);
    assert_eq!(sccs.num_components(), 1);
    Ok(())
}
