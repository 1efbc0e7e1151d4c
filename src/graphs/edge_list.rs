use super::{AdjList, InvalidDigraph};
use dsi_progress_logger::prelude::*;

/// A digraph in edge-list form.
///
/// Arc `i` is `source[i] -> target[i]`; sources must be grouped, that is,
/// non-decreasing. The edge list can be normalized into an [`AdjList`] with
/// sorted, duplicate-free successor lists using
/// [`build_adjacency`](EdgeList::build_adjacency); the result is cached
/// in the edge list together with the version of the arcs it was computed
/// from, and appending arcs with [`push_arc`](EdgeList::push_arc) makes the
/// cache stale.
///
/// Writing the cache requires a mutable reference, so concurrent builds on
/// the same instance need external synchronization.
///
/// # Examples
///
/// ```
/// use digraph_algo::graphs::EdgeList;
/// use dsi_progress_logger::no_logging;
///
/// let mut graph = EdgeList::new(2, vec![1, 1, 2], vec![2, 2, 1])?;
/// assert!(!graph.is_simple());
/// let adj = graph.build_adjacency(no_logging![]);
/// assert_eq!(adj.clone().into_inner(), vec![vec![2], vec![1]]);
/// # Ok::<(), digraph_algo::graphs::InvalidDigraph>(())
/// ```
#[derive(Debug, Clone)]
pub struct EdgeList {
    num_nodes: usize,
    source: Vec<usize>,
    target: Vec<usize>,
    version: u64,
    adj: Option<(u64, AdjList)>,
}

impl EdgeList {
    /// Creates an edge list with `num_nodes` vertices.
    ///
    /// The two sequences must have the same length, all endpoints must be
    /// in `1..=num_nodes`, and `source` must be non-decreasing.
    pub fn new(
        num_nodes: usize,
        source: Vec<usize>,
        target: Vec<usize>,
    ) -> Result<Self, InvalidDigraph> {
        if source.len() != target.len() {
            return Err(InvalidDigraph::LengthMismatch {
                sources: source.len(),
                targets: target.len(),
            });
        }
        for (position, (&s, &t)) in source.iter().zip(&target).enumerate() {
            check_arc(num_nodes, s, t)?;
            if position > 0 && source[position - 1] > s {
                return Err(InvalidDigraph::UnsortedEdgeList { position });
            }
        }
        Ok(Self {
            num_nodes,
            source,
            target,
            version: 0,
            adj: None,
        })
    }

    /// Creates an edge list from arcs that are known to be valid.
    pub(crate) fn from_raw(num_nodes: usize, source: Vec<usize>, target: Vec<usize>) -> Self {
        debug_assert!(Self::new(num_nodes, source.clone(), target.clone()).is_ok());
        Self {
            num_nodes,
            source,
            target,
            version: 0,
            adj: None,
        }
    }

    /// Returns the number of vertices.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of arcs, counting repetitions.
    pub fn num_arcs(&self) -> usize {
        self.source.len()
    }

    pub fn source(&self) -> &[usize] {
        &self.source
    }

    pub fn target(&self) -> &[usize] {
        &self.target
    }

    /// Appends the arc `source -> target`.
    ///
    /// `source` must not be smaller than the last source. Any cached
    /// adjacency becomes stale.
    pub fn push_arc(&mut self, source: usize, target: usize) -> Result<(), InvalidDigraph> {
        check_arc(self.num_nodes, source, target)?;
        if self.source.last().is_some_and(|&last| last > source) {
            return Err(InvalidDigraph::UnsortedEdgeList {
                position: self.source.len(),
            });
        }
        self.source.push(source);
        self.target.push(target);
        self.version += 1;
        Ok(())
    }

    /// Returns the cached adjacency, if it has been computed from the
    /// current arcs.
    pub fn cached_adjacency(&self) -> Option<&AdjList> {
        match &self.adj {
            Some((version, adj)) if *version == self.version => Some(adj),
            _ => None,
        }
    }

    /// Builds the adjacency form, caches it, and returns it.
    ///
    /// Successor lists are sorted and duplicate-free. Each arc is placed by
    /// binary search in the successor list of its source; arcs already
    /// present are skipped.
    pub fn build_adjacency(&mut self, pl: &mut impl ProgressLog) -> &AdjList {
        let adj = build(self.num_nodes, &self.source, &self.target, pl);
        &self.adj.insert((self.version, adj)).1
    }

    /// Returns the adjacency form, building it if the cache is missing or
    /// stale.
    pub fn adjacency(&mut self) -> &AdjList {
        if self.cached_adjacency().is_none() {
            self.adj = None;
        }
        let (num_nodes, version) = (self.num_nodes, self.version);
        let (source, target) = (&self.source, &self.target);
        &self
            .adj
            .get_or_insert_with(|| (version, build(num_nodes, source, target, no_logging![])))
            .1
    }

    /// Returns whether the edge list contains no repeated arc.
    ///
    /// If a fresh adjacency cache is available, the number of its arcs is
    /// compared with the number of raw arcs, as building the adjacency
    /// removes duplicates. Otherwise, the grouped arcs are scanned.
    pub fn is_simple(&self) -> bool {
        if let Some(adj) = self.cached_adjacency() {
            return adj.iter().map(<[usize]>::len).sum::<usize>() == self.num_arcs();
        }

        if self.source.is_empty() {
            return true;
        }

        // marked[t] is the last source having t as a target; sources are
        // grouped, so a repetition must come from the current source
        let mut marked = vec![0; self.num_nodes + 1];
        for (&s, &t) in self.source.iter().zip(&self.target) {
            if marked[t] == s {
                return false;
            }
            marked[t] = s;
        }
        true
    }
}

fn build(
    num_nodes: usize,
    source: &[usize],
    target: &[usize],
    pl: &mut impl ProgressLog,
) -> AdjList {
    pl.item_name("arc");
    pl.expected_updates(Some(source.len()));
    pl.start("Building adjacency lists...");

    let mut succ = vec![Vec::new(); num_nodes];
    for (&s, &t) in source.iter().zip(target) {
        let successors: &mut Vec<usize> = &mut succ[s - 1];
        if let Err(pos) = successors.binary_search(&t) {
            successors.insert(pos, t);
        }
        pl.light_update();
    }

    pl.done();
    AdjList::from_raw(succ)
}

fn check_arc(num_nodes: usize, source: usize, target: usize) -> Result<(), InvalidDigraph> {
    if source == 0 || source > num_nodes || target == 0 || target > num_nodes {
        return Err(InvalidDigraph::InvalidVertexReference {
            node: source,
            successor: target,
            num_nodes,
        });
    }
    Ok(())
}
