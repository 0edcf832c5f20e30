//! `rg-graph` — directed road graph and route search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`graph`]  | `RouteGraph`: vertices, edges, structural queries            |
//! | [`node`]   | `GeoNode`: one intersection and its outgoing edges           |
//! | [`edge`]   | `RoadEdge`: immutable directed road segment                  |
//! | [`search`] | BFS, Dijkstra, A*, `Algorithm`, `reconstruct_path`           |
//! | [`error`]  | `GraphError`, `GraphResult<T>`, `UnknownAlgorithm`           |
//!
//! The graph is generic over any [`rg_core::Location`].
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `serde`   | Derives `Serialize`/`Deserialize` on `RoadEdge`, `Algorithm`.|
//! | `fx-hash` | Uses FxHash instead of SipHash for all location-keyed maps.|

pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod search;


pub use edge::RoadEdge;
pub use error::{GraphError, GraphResult, UnknownAlgorithm};
pub use graph::RouteGraph;
pub use node::GeoNode;
pub use search::{reconstruct_path, Algorithm};

// ── Hash containers ───────────────────────────────────────────────────────────

#[cfg(not(feature = "fx-hash"))]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type Set<K> = std::collections::HashSet<K>;

#[cfg(feature = "fx-hash")]
pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(feature = "fx-hash")]
pub(crate) type Set<K> = rustc_hash::FxHashSet<K>;

/// Child → predecessor links recorded by a search, consumed by
/// [`reconstruct_path`].
#[cfg(not(feature = "fx-hash"))]
pub type ParentMap<L> = std::collections::HashMap<L, L>;
#[cfg(feature = "fx-hash")]
pub type ParentMap<L> = rustc_hash::FxHashMap<L, L>;
