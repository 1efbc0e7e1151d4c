//! Visits on digraphs.
//!
//! Implementations of [sequential visits](Sequential) depend on a type
//! parameter `A` implementing the trait [`Event`]; they provide visit methods
//! accepting a callback function with argument `A` and returning a
//! `ControlFlow<E, ()>`, where `E` is a type parameter of the visit method:
//! for example, `E` might be [`StoppedWhenDone`] when completing early, an
//! error type such as [`CycleDetected`](crate::CycleDetected), or
//! [`Infallible`](std::convert::Infallible) if the visit cannot be
//! interrupted.
//!
//! If a callback returns a [`Break`](ControlFlow::Break), the visit will be
//! interrupted immediately, and the [`Break`](ControlFlow::Break) value will
//! be the return value of the visit method; for uninterruptible visits we
//! suggest to use the [`no-break`](https://crates.io/crates/no-break) crate
//! and its [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break)
//! method on the result to let type inference run smoothly.
//!
//! Note that an interruption does not necessarily denote an error condition
//! (see, e.g., [`StoppedWhenDone`]).
//!
//! Visits accept a filter function with argument [`Event::FilterArgs`] that
//! is called when a new node is discovered. If the filter returns false, the
//! node is ignored, that is, not even marked as known.
//!
//! Visits must provide a `reset` method that makes it possible to reuse them.

pub mod depth_first;

use std::ops::ControlFlow;
use thiserror::Error;

#[derive(Error, Debug)]
/// The result of the visit was computed without completing the visit; for
/// example, during an acyclicity test a single arc pointing at the visit path
/// is sufficient to compute the result.
#[error("Stopped when done")]
pub struct StoppedWhenDone;

/// Types usable as arguments for the callbacks in visits.
///
/// Arguments are usually enums in which variants represent visit events
/// (previsits, postvisits, etc.). Each variant then contains additional data
/// related to the specific event.
///
/// The associated type [`Event::FilterArgs`] is the type of the arguments
/// passed to the filter associated with the visit.
pub trait Event {
    /// The type passed as input to the filter.
    type FilterArgs;
}

/// A convenience type alias for the filter arguments of an event.
pub type FilterArgs<A> = <A as Event>::FilterArgs;

/// A sequential visit.
///
/// Implementation of this trait must provide the
/// [`visit_filtered`](Sequential::visit_filtered) method, which should
/// perform a visit of a digraph starting from a given sequence of roots. A
/// [depth-first visit](depth_first) starts a new visit tree from each root
/// that has not been discovered yet.
pub trait Sequential<A: Event> {
    /// Visits the digraph from the specified roots with a filter function.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    ///
    /// # Arguments
    ///
    /// * `roots`: The nodes to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `filter`: The filter function.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the digraph from the specified roots.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    ///
    /// # Arguments
    ///
    /// * `roots`: The nodes to start the visit from.
    ///
    /// * `callback`: The callback function.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
