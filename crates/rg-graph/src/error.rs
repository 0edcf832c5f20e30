//! Graph-subsystem error type.
//!
//! An unreachable goal is not an error: searches report it as `Ok(None)`.

use thiserror::Error;

/// Errors produced by `rg-graph`.
///
/// Locations are carried pre-formatted so the error type stays independent
/// of the graph's location parameter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// Bad input to a mutation (`add_edge`).  The graph is left unchanged.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A search endpoint is not a vertex of the graph.
    #[error("location {location} not found in graph")]
    NotFound { location: String },

    /// Path reconstruction hit a location with no recorded parent.
    #[error("parent map has no predecessor for {location}")]
    BrokenPath { location: String },
}

impl GraphError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GraphError::InvalidArgument { reason: reason.into() }
    }

    pub(crate) fn not_found(location: impl std::fmt::Display) -> Self {
        GraphError::NotFound { location: location.to_string() }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Returned by `Algorithm::from_str` for an unrecognised name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown search algorithm {0:?} (expected bfs, dijkstra or astar)")]
pub struct UnknownAlgorithm(pub String);
