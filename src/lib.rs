/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Structural algorithms on directed graphs whose vertices are the integers
//! `1..=n`: [strongly connected components](sccs), [acyclicity](is_acyclic),
//! [topological sort](top_sort), [strong connectivity](is_strongly_connected),
//! and normalization and [simplicity checks](graphs::EdgeList::is_simple) of
//! edge lists.
//!
//! All visits are iterative, so digraphs with very long paths do not need a
//! large stack.

pub mod graphs;
pub mod sccs;
pub mod visits;

mod acyclicity;
pub use acyclicity::*;

mod top_sort;
pub use top_sort::*;

mod strong_connectivity;
pub use strong_connectivity::*;

/// Module exposing all traits in a single level.
pub mod traits {
    pub use crate::graphs::Digraph;
    pub use crate::visits::{Event, Sequential};
}

/// Use `use digraph_algo::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    pub use crate::graphs::{AdjList, EdgeList, InvalidDigraph};
    pub use crate::sccs::{self, gabow, Sccs};
    pub use crate::traits::*;
    pub use crate::visits::depth_first;
    pub use crate::top_sort::{top_sort, CycleDetected};
    pub use crate::{is_acyclic, is_strongly_connected};
}
