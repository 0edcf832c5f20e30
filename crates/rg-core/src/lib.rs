//! `rg-core` — foundational types for the `roadgraph` routing workspace.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`location`]  | `Location` trait consumed by the graph and its searches |
//! | [`geo`]       | `GeoPoint` (haversine km), `PlanePoint` (euclidean)     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the point types.         |

pub mod geo;
pub mod location;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{GeoPoint, PlanePoint};
pub use location::Location;
