//! # POI
//!
//! Point-of-interest records.
//!
//! `RawPoi` is what a POI source hands us: an opaque id, a location and
//! a free-form tag map. `RankedPoi` is the derived record the ranking
//! pipeline produces. Derived records are recomputed whenever the
//! reference point or result set changes, never persisted.

use std::collections::HashMap;

use super::GeoPoint;

/// Free-form OSM-style tag map (insertion order irrelevant)
pub type Tags = HashMap<String, String>;

/// Opaque identifier for a POI, stable across queries
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct PoiId(i64);

impl PoiId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PoiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A POI as returned by a source, read-only to the pipeline
#[derive(Clone, Debug, PartialEq)]
pub struct RawPoi {
    /// Source-assigned identifier
    pub id: PoiId,

    /// Where the POI is
    pub location: GeoPoint,

    /// Free-form tags (name, amenity, shop, ...)
    pub tags: Tags,
}

impl RawPoi {
    pub fn new(id: PoiId, location: GeoPoint, tags: Tags) -> Self {
        Self { id, location, tags }
    }
}

/// A POI augmented with its distance from the reference point
#[derive(Clone, Debug, PartialEq)]
pub struct RankedPoi {
    /// The underlying source record
    pub poi: RawPoi,

    /// Great-circle distance from the reference point, kilometers
    pub distance_km: f64,

    /// 0-based position after the sort
    pub rank: usize,
}
