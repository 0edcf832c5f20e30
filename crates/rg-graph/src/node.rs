//! Graph vertex: one intersection plus its outgoing road segments.

use rg_core::Location;

use crate::edge::RoadEdge;

/// A vertex of a [`RouteGraph`][crate::RouteGraph].
///
/// A node is purely structural.  Tentative distances and heuristic estimates
/// belong to a single search call and live in that call's state, never here,
/// so any number of searches may read the same node at once.
#[derive(Clone, Debug)]
pub struct GeoNode<L> {
    location: L,
    edges:    Vec<RoadEdge<L>>,
}

impl<L: Location> GeoNode<L> {
    pub(crate) fn new(location: L) -> Self {
        Self { location, edges: Vec::new() }
    }

    #[inline]
    pub fn location(&self) -> L {
        self.location
    }

    /// Append an outgoing edge.  `edge.origin()` must be this node's location.
    pub(crate) fn add_outgoing_edge(&mut self, edge: RoadEdge<L>) {
        debug_assert_eq!(edge.origin(), self.location);
        self.edges.push(edge);
    }

    /// Destinations of the outgoing edges, in insertion order.
    ///
    /// Parallel edges yield the same destination more than once.
    pub fn neighbors(&self) -> impl Iterator<Item = L> + '_ {
        self.edges.iter().map(RoadEdge::destination)
    }

    /// Outgoing edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &RoadEdge<L>> + '_ {
        self.edges.iter()
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}
