use super::{Digraph, InvalidDigraph};

/// A digraph in adjacency form.
///
/// The successors of vertex `v` are stored at position `v - 1`, in insertion
/// order; repeated successors (multiple arcs) are allowed. Instances built by
/// [`EdgeList::build_adjacency`](super::EdgeList::build_adjacency) have sorted,
/// duplicate-free successor lists.
///
/// # Examples
///
/// ```
/// use digraph_algo::graphs::{AdjList, Digraph};
///
/// // Arcs 1 -> 2, 1 -> 3, 2 -> 1 and 3 -> 2
/// let graph = AdjList::new(vec![vec![2, 3], vec![1], vec![2]])?;
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.successors(1), &[2, 3]);
/// # Ok::<(), digraph_algo::graphs::InvalidDigraph>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjList {
    succ: Vec<Vec<usize>>,
}

impl AdjList {
    /// Creates a digraph from the successor lists of vertices `1..=n`.
    ///
    /// Every successor must be a vertex in `1..=n`.
    pub fn new(succ: Vec<Vec<usize>>) -> Result<Self, InvalidDigraph> {
        let num_nodes = succ.len();
        for (node, successors) in (1..).zip(&succ) {
            if let Some(&successor) = successors
                .iter()
                .find(|&&s| s == 0 || s > num_nodes)
            {
                return Err(InvalidDigraph::InvalidVertexReference {
                    node,
                    successor,
                    num_nodes,
                });
            }
        }
        Ok(Self { succ })
    }

    /// Creates a digraph with `num_nodes` vertices from a list of arcs.
    ///
    /// Arcs are appended to successor lists in the order they are given.
    pub fn from_arcs(
        num_nodes: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, InvalidDigraph> {
        let mut succ = vec![Vec::new(); num_nodes];
        for (node, successor) in arcs {
            if node == 0 || node > num_nodes || successor == 0 || successor > num_nodes {
                return Err(InvalidDigraph::InvalidVertexReference {
                    node,
                    successor,
                    num_nodes,
                });
            }
            succ[node - 1].push(successor);
        }
        Ok(Self { succ })
    }

    /// Creates a digraph from successor lists that are known to be valid.
    pub(crate) fn from_raw(succ: Vec<Vec<usize>>) -> Self {
        debug_assert!(Self::new(succ.clone()).is_ok());
        Self { succ }
    }

    /// Returns an iterator over the successor lists, starting from vertex 1.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.succ.iter().map(Vec::as_slice)
    }

    /// Consumes the digraph, returning its successor lists.
    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.succ
    }

    /// Returns whether no vertex has two arcs to the same successor.
    pub fn is_simple(&self) -> bool {
        // marked[t] is the last vertex having t as a successor
        let mut marked = vec![0; self.succ.len() + 1];
        for (node, successors) in (1..).zip(&self.succ) {
            for &s in successors {
                if marked[s] == node {
                    return false;
                }
                marked[s] = node;
            }
        }
        true
    }
}

impl Digraph for AdjList {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node - 1]
    }
}
