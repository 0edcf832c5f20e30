//! The abstract vertex key used by `rg-graph`.
//!
//! The graph never looks inside a location.  It only needs to use it as a
//! map key, print it in errors and log events, and ask how far apart two of
//! them are (the A* heuristic).

use std::fmt;
use std::hash::Hash;

/// A point that can serve as a road-graph vertex.
///
/// # Contract
///
/// - `Eq` and `Hash` must agree: two locations that compare equal name the
///   same vertex.
/// - `distance_to` must be symmetric and non-negative.  For A* to return
///   optimal routes it must also never exceed the cost of any road path
///   between the two points (straight-line distance against road lengths in
///   the same unit satisfies this).
pub trait Location: Copy + Eq + Hash + fmt::Debug + fmt::Display {
    /// Distance from `self` to `other`, in the same unit as edge lengths.
    fn distance_to(&self, other: &Self) -> f64;
}
