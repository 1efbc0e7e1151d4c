//! Representations of directed graphs.
//!
//! Vertices are dense integers in `1..=n`. Algorithms work on any type
//! implementing [`Digraph`], which provides random access to the successors
//! of each vertex; the [adjacency form](AdjList) implements it directly,
//! whereas the [edge-list form](EdgeList) must be normalized first using
//! [`EdgeList::build_adjacency`].

mod adj_list;
pub use adj_list::*;

mod edge_list;
pub use edge_list::*;

pub mod random;

use thiserror::Error;

/// A directed graph with vertices `1..=n` and random access to successors.
pub trait Digraph {
    /// Returns the number of vertices.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node`, which must be in `1..=n`.
    fn successors(&self, node: usize) -> &[usize];

    /// Returns the number of successors of `node`.
    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).len()
    }

    /// Returns the number of arcs, counting repetitions.
    fn num_arcs(&self) -> usize {
        (1..=self.num_nodes()).map(|node| self.outdegree(node)).sum()
    }
}

impl<G: Digraph + ?Sized> Digraph for &G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }

    fn num_arcs(&self) -> usize {
        (**self).num_arcs()
    }
}

/// Malformed input rejected when building a digraph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDigraph {
    /// An arc refers to a vertex outside `1..=num_nodes`.
    #[error("Arc {node} -> {successor} refers to a vertex outside 1..={num_nodes}")]
    InvalidVertexReference {
        node: usize,
        successor: usize,
        num_nodes: usize,
    },
    /// The sources of an edge list are not grouped (non-decreasing).
    #[error("Edge list sources decrease at position {position}")]
    UnsortedEdgeList { position: usize },
    /// The source and target sequences of an edge list differ in length.
    #[error("Edge list has {sources} sources but {targets} targets")]
    LengthMismatch { sources: usize, targets: usize },
}
