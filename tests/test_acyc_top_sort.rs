use anyhow::Result;
use digraph_algo::graphs::{random::ErdosRenyi, AdjList, Digraph};
use digraph_algo::sccs::gabow;
use digraph_algo::{is_acyclic, is_strongly_connected, top_sort, CycleDetected};
use dsi_progress_logger::prelude::*;

/// Checks that `order` is a permutation of the nodes in which the target of
/// each arc comes before its source.
fn check_dependency_order(graph: &AdjList, order: &[usize]) {
    let num_nodes = graph.num_nodes();
    assert_eq!(order.len(), num_nodes);
    let mut pos = vec![usize::MAX; num_nodes + 1];
    for (i, &node) in order.iter().enumerate() {
        assert_eq!(pos[node], usize::MAX, "node {node} appears twice");
        pos[node] = i;
    }
    for u in 1..=num_nodes {
        for &v in graph.successors(u) {
            assert!(pos[v] < pos[u], "arc {u} -> {v} out of order");
        }
    }
}

#[test]
fn test_top_sort() -> Result<()> {
    assert_eq!(
        top_sort(AdjList::from_arcs(3, [(2, 3), (1, 2)])?, no_logging![])?,
        vec![3, 2, 1].into_boxed_slice()
    );

    assert_eq!(
        top_sort(
            AdjList::from_arcs(4, [(1, 2), (1, 3), (3, 4), (2, 4)])?,
            no_logging![]
        )?,
        vec![4, 2, 3, 1].into_boxed_slice()
    );

    Ok(())
}

#[test]
fn test_scenario_b() -> Result<()> {
    let graph = AdjList::new(vec![vec![2], vec![3], vec![]])?;
    assert!(is_acyclic(&graph, no_logging![]));
    assert_eq!(
        top_sort(&graph, no_logging![])?,
        vec![3, 2, 1].into_boxed_slice()
    );
    Ok(())
}

#[test]
fn test_loop() -> Result<()> {
    let graph = AdjList::new(vec![vec![1]])?;
    assert!(!is_acyclic(&graph, no_logging![]));
    assert_eq!(
        top_sort(&graph, no_logging![]),
        Err(CycleDetected {
            from: 1,
            to: 1
        })
    );
    Ok(())
}

#[test]
fn test_cycle() -> Result<()> {
    let graph = AdjList::from_arcs(4, [(1, 2), (2, 3), (3, 1), (2, 4)])?;
    assert!(!is_acyclic(&graph, no_logging![]));
    assert_eq!(
        top_sort(&graph, no_logging![]),
        Err(CycleDetected {
            from: 3,
            to: 1
        })
    );
    Ok(())
}

#[test]
fn test_loop_in_singleton_component() -> Result<()> {
    // All components are singletons, but node 2 has a loop
    let graph = AdjList::from_arcs(2, [(1, 2), (2, 2)])?;
    let sccs = gabow(&graph, no_logging![]);
    assert_eq!(sccs.num_components(), 2);
    assert!(sccs.components().iter().all(|c| c.len() == 1));
    assert!(!is_acyclic(&graph, no_logging![]));
    let cycle = top_sort(&graph, no_logging![]).unwrap_err();
    assert_eq!(cycle, CycleDetected { from: 2, to: 2 });
    assert_eq!(
        cycle.to_string(),
        "The digraph is not acyclic: arc 2 -> 2 closes a cycle"
    );
    Ok(())
}

#[test]
fn test_empty() -> Result<()> {
    let graph = AdjList::new(vec![])?;
    assert!(is_acyclic(&graph, no_logging![]));
    assert!(is_strongly_connected(&graph, no_logging![]));
    assert!(top_sort(&graph, no_logging![])?.is_empty());
    Ok(())
}

#[test]
fn test_forward_and_cross_arcs() -> Result<()> {
    // 1 -> 3 is a forward arc, 4 -> 2 a cross arc: neither is a cycle
    let graph = AdjList::from_arcs(4, [(1, 2), (2, 3), (1, 3), (4, 2)])?;
    assert!(is_acyclic(&graph, no_logging![]));
    check_dependency_order(&graph, &top_sort(&graph, no_logging![])?);
    Ok(())
}

#[test]
fn test_er() -> Result<()> {
    for n in (10..=50).step_by(10) {
        for seed in 0..10 {
            let graph = ErdosRenyi::new(n, 0.05, seed).adj_list();
            // Keep only arcs to larger nodes to obtain a DAG
            let dag = AdjList::new(
                graph
                    .iter()
                    .enumerate()
                    .map(|(i, s)| s.iter().copied().filter(|&v| v > i + 1).collect::<Vec<_>>())
                    .collect(),
            )?;

            // Add a loop on a node chosen by the seed
            let looped = AdjList::from_arcs(
                n,
                (1..=n)
                    .flat_map(|u| graph.successors(u).iter().map(move |&v| (u, v)))
                    .chain([(seed as usize % n + 1, seed as usize % n + 1)]),
            )?;

            for g in [&graph, &dag, &looped] {
                let acyclic = is_acyclic(g, no_logging![]);
                let sccs = gabow(g, no_logging![]);
                let has_loop = (1..=n).any(|u| g.successors(u).contains(&u));
                // Acyclicity is equivalent to all components being
                // singletons and no node having a loop
                assert_eq!(
                    acyclic,
                    sccs.num_components() == g.num_nodes() && !has_loop
                );
                match top_sort(g, no_logging![]) {
                    Ok(order) => {
                        assert!(acyclic);
                        check_dependency_order(g, &order);
                    }
                    Err(_) => assert!(!acyclic),
                }
            }
            assert!(is_acyclic(&dag, no_logging![]));
            assert!(!is_acyclic(&looped, no_logging![]));
        }
    }
    Ok(())
}

#[test]
fn test_long_path() -> Result<()> {
    let n = 100_000;
    let graph = AdjList::from_arcs(n, (1..n).map(|x| (x, x + 1)))?;
    assert!(is_acyclic(&graph, no_logging![]));
    let order = top_sort(&graph, no_logging![])?;
    assert_eq!(order[0], n);
    assert_eq!(order[n - 1], 1);

    let graph = AdjList::from_arcs(n, (1..n).map(|x| (x, x + 1)).chain([(n, 1)]))?;
    assert!(!is_acyclic(&graph, no_logging![]));
    assert!(top_sort(&graph, no_logging![]).is_err());
    Ok(())
}
