//! Road graph construction and structural queries.
//!
//! # Data layout
//!
//! Vertices are kept in a hash map from location to [`GeoNode`]; each node
//! owns its outgoing edges in insertion order.  Unlike a compressed layout
//! the graph can keep growing after it has been searched, which is what a
//! loader calling `add_vertex`/`add_edge` in arbitrary order needs.
//!
//! Searches live in [`crate::search`]; they borrow the graph immutably.

use tracing::trace;

use rg_core::Location;

use crate::edge::RoadEdge;
use crate::error::{GraphError, GraphResult};
use crate::node::GeoNode;
use crate::Map;

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Directed graph of intersections connected by named road segments.
///
/// # Example
///
/// ```
/// use rg_core::PlanePoint;
/// use rg_graph::RouteGraph;
///
/// let a = PlanePoint::new(0.0, 0.0);
/// let b = PlanePoint::new(5.0, 0.0);
///
/// let mut g = RouteGraph::new();
/// g.add_vertex(a);
/// g.add_vertex(b);
/// g.add_edge(a, b, "Main St", 5.0).unwrap();
///
/// assert_eq!(g.dijkstra(a, b).unwrap(), Some(vec![a, b]));
/// ```
#[derive(Clone, Debug)]
pub struct RouteGraph<L> {
    pub(crate) vertices: Map<L, GeoNode<L>>,
    num_edges:           usize,
}

impl<L: Location> RouteGraph<L> {
    pub fn new() -> Self {
        Self { vertices: Map::default(), num_edges: 0 }
    }

    /// Pre-allocate room for `vertices` intersections to reduce rehashing
    /// while a loader populates the graph.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices:  Map::with_capacity_and_hasher(vertices, Default::default()),
            num_edges: 0,
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add an intersection at `location`.
    ///
    /// Returns `true` if a node was created, `false` if the location was
    /// already present (the graph is then left untouched).
    pub fn add_vertex(&mut self, location: L) -> bool {
        if self.vertices.contains_key(&location) {
            return false;
        }
        self.vertices.insert(location, GeoNode::new(location));
        trace!(%location, "vertex added");
        true
    }

    /// Add a **directed** road segment from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if `length` is negative or not
    /// finite, or if either endpoint has not been added with
    /// [`add_vertex`](Self::add_vertex).  Nothing is modified on error.
    pub fn add_edge(
        &mut self,
        from: L,
        to: L,
        street_name: impl Into<String>,
        length: f64,
    ) -> GraphResult<()> {
        if !length.is_finite() || length < 0.0 {
            return Err(GraphError::invalid(format!(
                "road length must be a finite non-negative number, got {length}"
            )));
        }
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::invalid(format!("endpoint {to} is not a vertex")));
        }
        let Some(node) = self.vertices.get_mut(&from) else {
            return Err(GraphError::invalid(format!("endpoint {from} is not a vertex")));
        };

        let street_name = street_name.into();
        trace!(%from, %to, street = %street_name, length, "edge added");
        node.add_outgoing_edge(RoadEdge::new(from, to, street_name, length));
        self.num_edges += 1;
        Ok(())
    }

    // ── Structural queries ────────────────────────────────────────────────

    /// All intersections, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = L> + '_ {
        self.vertices.keys().copied()
    }

    pub fn contains(&self, location: &L) -> bool {
        self.vertices.contains_key(location)
    }

    pub fn node(&self, location: &L) -> Option<&GeoNode<L>> {
        self.vertices.get(location)
    }

    /// One-hop successors of `location` in edge insertion order, or `None`
    /// if `location` is not a vertex.
    pub fn neighbors(&self, location: &L) -> Option<impl Iterator<Item = L> + '_> {
        self.vertices.get(location).map(|node| node.neighbors())
    }

    /// Every edge in the graph, grouped by origin.
    pub fn edges(&self) -> impl Iterator<Item = &RoadEdge<L>> + '_ {
        self.vertices.values().flat_map(|node| node.edges())
    }

    /// Total road length along `path`.
    ///
    /// Where parallel edges join a pair of consecutive locations the shortest
    /// one is counted, matching what a weighted search relaxes through.
    /// Returns `None` if some hop has no edge.  A single-location path costs
    /// zero.
    pub fn path_cost(&self, path: &[L]) -> Option<f64> {
        path.windows(2).try_fold(0.0, |total, hop| {
            let best = self
                .vertices
                .get(&hop[0])?
                .edges()
                .filter(|e| e.destination() == hop[1])
                .map(RoadEdge::length)
                .min_by(f64::total_cmp)?;
            Some(total + best)
        })
    }

    /// Fetch the node for a search endpoint, failing with `NotFound`.
    pub(crate) fn require(&self, location: L) -> GraphResult<&GeoNode<L>> {
        self.vertices.get(&location).ok_or_else(|| GraphError::not_found(location))
    }
}

impl<L: Location> Default for RouteGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}
