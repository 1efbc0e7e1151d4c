//! Algorithms used to compute and work with strongly connected components.
//!
//! Components are computed by [Gabow's path-based algorithm](gabow), which
//! needs a single depth-first visit. If you just need to know whether a
//! digraph is strongly connected, [`is_strongly_connected`](crate::is_strongly_connected)
//! is cheaper.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use digraph_algo::graphs::AdjList;
//! use digraph_algo::sccs::*;
//!
//! let graph = AdjList::from_arcs(4, [(1, 2), (2, 3), (3, 1), (2, 4)])?;
//!
//! // Let's build the graph SCCS with Gabow's algorithm
//! let mut sccs = gabow(&graph, no_logging![]);
//!
//! // Let's sort the SCC by size
//! let sizes = sccs.sort_by_size();
//!
//! assert_eq!(sizes, vec![3, 1].into_boxed_slice());
//! assert_eq!(sccs.ids(), &[1, 1, 1, 2]);
//! # Ok::<(), digraph_algo::graphs::InvalidDigraph>(())
//! ```

mod gabow;
pub use gabow::*;

use rayon::{
    iter::{IntoParallelRefMutIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Strongly connected components.
///
/// An instance of this structure stores, for each vertex, the [index of its
/// component](Sccs::component_of), and, for each component, [its
/// vertices](Sccs::components). Components are numbered from 1 to
/// [`num_components`](Sccs::num_components); vertex `v` is in component `j`
/// if and only if `v` appears in `components()[j - 1]`.
///
/// Neither the numbering of the components nor the order of vertices inside a
/// component are specified, but the components can be [renumbered by
/// decreasing size](Sccs::sort_by_size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    id: Box<[usize]>,
    comps: Vec<Box<[usize]>>,
}

impl Sccs {
    /// Creates a new structure from the component of each vertex
    /// (`id[v - 1]` being the component of `v`) and the list of components.
    pub fn new(id: Box<[usize]>, comps: Vec<Box<[usize]>>) -> Self {
        debug_assert!(id.iter().all(|&j| j >= 1 && j <= comps.len()));
        debug_assert_eq!(comps.iter().map(|c| c.len()).sum::<usize>(), id.len());
        Sccs { id, comps }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.comps.len()
    }

    /// Returns a slice containing, at position `v - 1`, the index of the
    /// component vertex `v` belongs to.
    #[inline(always)]
    pub fn ids(&self) -> &[usize] {
        &self.id
    }

    /// Returns the index of the component of `node`.
    #[inline(always)]
    pub fn component_of(&self, node: usize) -> usize {
        self.id[node - 1]
    }

    /// Returns the components; component `j` is at position `j - 1`.
    pub fn components(&self) -> &[Box<[usize]>] {
        &self.comps
    }

    /// Consumes the structure, returning the component of each vertex and
    /// the list of components.
    pub fn into_inner(self) -> (Box<[usize]>, Vec<Box<[usize]>>) {
        (self.id, self.comps)
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        self.comps.iter().map(|c| c.len()).collect()
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of strongly connected components
    /// will be decreasing in the component index. The method returns the sizes
    /// of the components after the renumbering.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        self.comps.sort_by(|x, y| y.len().cmp(&x.len()));
        for (j, comp) in (1..).zip(&self.comps) {
            for &node in comp.iter() {
                self.id[node - 1] = j;
            }
        }
        self.compute_sizes()
    }

    /// Renumbers the components by decreasing size using parallel methods.
    ///
    /// After a call to this method, the sizes of strongly connected components
    /// will be decreasing in the component index. The method returns the sizes
    /// of the components after the renumbering.
    pub fn par_sort_by_size(&mut self) -> Box<[usize]> {
        let sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.par_sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        sort_perm
            .iter()
            .enumerate()
            .for_each(|(i, &x)| inv_perm[x] = i + 1);

        self.id
            .par_iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component - 1]);

        let mut comps = std::mem::take(&mut self.comps);
        let mut sorted = Vec::with_capacity(comps.len());
        sorted.extend(sort_perm.iter().map(|&x| std::mem::take(&mut comps[x])));
        self.comps = sorted;
        self.compute_sizes()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn mock() -> Sccs {
        Sccs::new(
            vec![1, 2, 2, 2, 1, 3].into_boxed_slice(),
            vec![
                vec![1, 5].into_boxed_slice(),
                vec![4, 3, 2].into_boxed_slice(),
                vec![6].into_boxed_slice(),
            ],
        )
    }

    #[test]
    fn test_compute_sizes() {
        assert_eq!(mock().compute_sizes(), vec![2, 3, 1].into_boxed_slice());
    }

    #[test]
    fn test_sort_by_size() {
        let mut sccs = mock();
        assert_eq!(sccs.sort_by_size(), vec![3, 2, 1].into_boxed_slice());
        assert_eq!(sccs.ids(), &[2, 1, 1, 1, 2, 3]);
        assert_eq!(&sccs.components()[0][..], &[4, 3, 2]);
        assert_eq!(sccs.component_of(6), 3);
    }

    #[test]
    fn test_par_sort_by_size() {
        let mut sccs = mock();
        let mut par_sccs = mock();
        assert_eq!(sccs.sort_by_size(), par_sccs.par_sort_by_size());
        assert_eq!(sccs, par_sccs);
    }
}
