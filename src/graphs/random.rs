//! Random digraphs.

use super::{AdjList, EdgeList};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Erdös-Rényi random digraphs.
///
/// The model is parameterized by the number of vertices `n` and the
/// probability `p` of an arc between any two distinct vertices. Loops are
/// never included. The same seed always generates the same digraph.
///
/// Generation takes time quadratic in `n`.
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random digraph, given the number of
    /// vertices, the probability of an arc between any two vertices, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Generates the digraph in adjacency form, with sorted successors.
    pub fn adj_list(&self) -> AdjList {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let succ = (1..=self.n)
            .map(|x| {
                (1..=self.n)
                    .filter(|&y| y != x && rng.random_bool(self.p))
                    .collect::<Vec<_>>()
            })
            .collect();
        AdjList::from_raw(succ)
    }

    /// Generates the same digraph as [`adj_list`](Self::adj_list) in
    /// edge-list form.
    pub fn edge_list(&self) -> EdgeList {
        let (source, target): (Vec<usize>, Vec<usize>) = (1..)
            .zip(self.adj_list().into_inner())
            .flat_map(|(x, succ)| succ.into_iter().map(move |y| (x, y)))
            .unzip();
        EdgeList::from_raw(self.n, source, target)
    }
}
