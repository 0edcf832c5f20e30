//! Coordinate types implementing [`Location`].
//!
//! Both types store `f64` components.  Floats are not `Eq`/`Hash`, so the
//! `coord_key!` macro implements equality and hashing over the IEEE bit
//! patterns instead, with `-0.0` folded into `0.0`.  NaN coordinates compare
//! equal to themselves under this scheme; loaders should not produce them.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Location;

/// Canonical bit pattern of a coordinate component.
#[inline(always)]
fn key_bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

/// Implement bitwise `PartialEq`, `Eq` and `Hash` for a two-component point.
macro_rules! coord_key {
    ($name:ident { $a:ident, $b:ident }) => {
        impl PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                key_bits(self.$a) == key_bits(other.$a)
                    && key_bits(self.$b) == key_bits(other.$b)
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                key_bits(self.$a).hash(state);
                key_bits(self.$b).hash(state);
            }
        }
    };
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

coord_key!(GeoPoint { lat, lon });

impl GeoPoint {
    /// Mean Earth radius in kilometres.
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;

    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Self::EARTH_RADIUS_KM * c
    }
}

impl Location for GeoPoint {
    #[inline]
    fn distance_to(&self, other: &Self) -> f64 {
        self.distance_km(*other)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── PlanePoint ────────────────────────────────────────────────────────────────

/// A point on a flat plane with Euclidean distance.
///
/// Handy for synthetic street grids, where edge lengths are laid out in the
/// same unit as the coordinates and straight-line distance is an exact lower
/// bound on road distance.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

coord_key!(PlanePoint { x, y });

impl PlanePoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Location for PlanePoint {
    #[inline]
    fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
