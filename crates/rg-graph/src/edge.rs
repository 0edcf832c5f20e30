//! Directed road segment.

use rg_core::Location;

/// An immutable directed road segment between two intersections.
///
/// Edges are only created by [`RouteGraph::add_edge`][crate::RouteGraph::add_edge],
/// which validates the length and both endpoints first.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadEdge<L> {
    origin:      L,
    destination: L,
    street_name: String,
    length:      f64,
}

impl<L: Location> RoadEdge<L> {
    pub(crate) fn new(origin: L, destination: L, street_name: String, length: f64) -> Self {
        debug_assert!(length >= 0.0);
        Self { origin, destination, street_name, length }
    }

    #[inline]
    pub fn origin(&self) -> L {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> L {
        self.destination
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    /// Road length, in the same unit as [`Location::distance_to`].
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
}
