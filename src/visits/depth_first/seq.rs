use crate::graphs::Digraph;
use crate::visits::{
    depth_first::{EventPred, FilterArgsPred},
    Sequential,
};
use sealed::sealed;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A depth-first visit which keeps track of predecessors, but not nodes on the stack.
pub type SeqPred<'a, G> = SeqIter<'a, TwoStates, G>;

/// A depth-first visit which keeps track of predecessors and nodes on the stack.
pub type SeqPath<'a, G> = SeqIter<'a, ThreeStates, G>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack
/// size: recursion is replaced by an explicit stack of [frames](Frame), one
/// for each node on the visit path, so the depth of the visit is bounded
/// only by the number of nodes.
///
/// There are two versions of the visit, which are type aliases to the same
/// common implementation: [`SeqPred`] and [`SeqPath`] (the generic
/// implementation should not be instantiated by the user).
///
/// * [`SeqPred`] does not keep track of nodes on the stack; it can be used,
///   for example, to compute reachability or [strongly connected
///   components](crate::sccs::gabow).
/// * [`SeqPath`] keeps track of nodes on the stack; it can be used, for
///   example, to establish [acyclicity](crate::is_acyclic) or to compute a
///   [topological sort](crate::top_sort()).
///
/// [`SeqPred`] uses one bit per node to remember known nodes, whereas
/// [`SeqPath`] uses two bits per node to remember known nodes and whether
/// the node is on the visit path. With [`SeqPred`] the Boolean associated
/// with events of type [`Revisit`](`EventPred::Revisit`) is always false.
///
/// All state is owned by the visit, so it is released when the visit is
/// dropped, even if the visit was interrupted.
///
/// # Examples
///
/// Let's test acyclicity:
///
/// ```
/// use digraph_algo::graphs::AdjList;
/// use digraph_algo::visits::*;
/// use digraph_algo::visits::depth_first::*;
/// use std::ops::ControlFlow::{Break, Continue};
///
/// let graph = AdjList::from_arcs(4, [(1, 2), (2, 3), (3, 1), (2, 4)])?;
/// let mut visit = SeqPath::new(&graph);
///
/// assert!(visit
///     .visit(1..=4, |event| {
///         // Stop the visit as soon as a back arc is found
///         match event {
///             EventPred::Revisit { on_stack: true, .. } => Break(StoppedWhenDone {}),
///             _ => Continue(()),
///         }
///     })
///     .is_break()); // As the graph is not acyclic
/// # Ok::<(), digraph_algo::graphs::InvalidDigraph>(())
/// ```
///
/// Or, assuming the input is acyclic, let us compute a dependency order,
/// in which the targets of arcs come first:
///
/// ```
/// use digraph_algo::graphs::{AdjList, Digraph};
/// use digraph_algo::visits::*;
/// use digraph_algo::visits::depth_first::*;
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = AdjList::from_arcs(4, [(1, 2), (2, 3), (2, 4), (1, 4)])?;
/// let mut visit = SeqPred::new(&graph);
/// let mut order = Vec::with_capacity(graph.num_nodes());
///
/// visit
///     .visit(1..=graph.num_nodes(), |event| {
///         if let EventPred::Postvisit { node, .. } = event {
///             order.push(node);
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
///
/// assert_eq!(order, vec![3, 4, 2, 1]);
/// # Ok::<(), digraph_algo::graphs::InvalidDigraph>(())
/// ```
pub struct SeqIter<'a, S, G: Digraph> {
    graph: &'a G,
    stack: Vec<Frame<'a>>,
    state: S,
}

/// An entry of the visit stack: a node on the visit path, together with
/// the position of the next successor to enumerate.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    node: usize,
    cursor: usize,
    successors: &'a [usize],
}

impl<'a> Frame<'a> {
    fn new(node: usize, successors: &'a [usize]) -> Self {
        Self {
            node,
            cursor: 0,
            successors,
        }
    }

    /// Returns the next successor to enumerate, advancing the cursor.
    #[inline(always)]
    fn next_successor(&mut self) -> Option<usize> {
        let succ = *self.successors.get(self.cursor)?;
        self.cursor += 1;
        Some(succ)
    }
}

impl<'a, S: NodeStates, G: Digraph> SeqIter<'a, S, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the digraph to visit.
    pub fn new(graph: &'a G) -> SeqIter<'a, S, G> {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            state: S::new(num_nodes),
        }
    }
}

impl<S, G: Digraph> SeqIter<'_, S, G> {
    /// Returns the nodes on the visit path, from the root.
    ///
    /// This method is useful only in the case of interrupted visits, as in a
    /// completed visit the path is empty.
    pub fn path(&self) -> impl Iterator<Item = usize> + '_ {
        self.stack.iter().map(|frame| frame.node)
    }
}

#[doc(hidden)]
#[sealed]
pub trait NodeStates {
    fn new(n: usize) -> Self;
    fn set_on_stack(&mut self, node: usize);
    fn set_off_stack(&mut self, node: usize);
    fn on_stack(&self, node: usize) -> bool;
    fn set_known(&mut self, node: usize);
    fn known(&self, node: usize) -> bool;
    fn reset(&mut self);
}

#[doc(hidden)]
/// A two-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does not keep track of nodes on the stack, so events of
/// type [`Revisit`](`EventPred::Revisit`) will always have the associated
/// Boolean equal to false.
pub struct TwoStates(BitVec);

// Nodes start from one, so bit zero is never used
#[sealed]
impl NodeStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates(BitVec::new(n + 1))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn set_off_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn on_stack(&self, _node: usize) -> bool {
        false
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node)
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.reset();
    }
}

#[doc(hidden)]
/// A three-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does keep track of nodes on the stack, so events of type
/// [`Revisit`](`EventPred::Revisit`) will provide information about whether the
/// node associated with event is currently on the visit path.
pub struct ThreeStates(BitVec);

#[sealed]
impl NodeStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates(BitVec::new(2 * (n + 1)))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, true);
    }
    #[inline(always)]
    fn set_off_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, false);
    }
    #[inline(always)]
    fn on_stack(&self, node: usize) -> bool {
        self.0.get(node * 2 + 1)
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node * 2, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node * 2)
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.reset();
    }
}

impl<S: NodeStates, G: Digraph> Sequential<EventPred> for SeqIter<'_, S, G> {
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(EventPred) -> ControlFlow<E, ()>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        let graph = self.graph;
        let state = &mut self.state;

        for root in roots {
            if state.known(root)
                || !filter(FilterArgsPred {
                    node: root,
                    pred: root,
                    root,
                    depth: 0,
                })
            {
                // We ignore the node: it might be visited later
                continue;
            }

            callback(EventPred::Init { root })?;

            state.set_known(root);

            callback(EventPred::Previsit {
                node: root,
                parent: root,
                root,
                depth: 0,
            })?;

            self.stack.push(Frame::new(root, graph.successors(root)));

            state.set_on_stack(root);

            'recurse: loop {
                let depth = self.stack.len();
                let Some(frame) = self.stack.last_mut() else {
                    callback(EventPred::Done { root })?;
                    break;
                };
                let curr = frame.node;

                while let Some(succ) = frame.next_successor() {
                    // Check if node should be visited
                    if state.known(succ) {
                        // Node has already been discovered
                        callback(EventPred::Revisit {
                            node: succ,
                            pred: curr,
                            root,
                            depth,
                            on_stack: state.on_stack(succ),
                        })?;
                    } else {
                        // First time seeing node
                        if filter(FilterArgsPred {
                            node: succ,
                            pred: curr,
                            root,
                            depth,
                        }) {
                            state.set_known(succ);

                            callback(EventPred::Previsit {
                                node: succ,
                                parent: curr,
                                root,
                                depth,
                            })?;

                            self.stack.push(Frame::new(succ, graph.successors(succ)));

                            state.set_on_stack(succ);

                            continue 'recurse;
                        } // Else we ignore the node: it might be visited later
                    }
                }

                // The parent is the node of the frame below, if any
                let parent = if depth > 1 {
                    self.stack[depth - 2].node
                } else {
                    root
                };

                callback(EventPred::Postvisit {
                    node: curr,
                    parent,
                    root,
                    depth: depth - 1,
                })?;

                state.set_off_stack(curr);

                self.stack.pop();
            }
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}
