//! # POI Source Port
//!
//! Trait for spatial POI queries.
//!
//! `PoiSource: fn(filter, center, radius) -> pois` - What's nearby?
//!
//! Implemented by geodata adapters (Overpass).

use crate::core::{GeoPoint, RawPoi};

/// Result type for POI source operations
pub type PoiResult<T> = Result<T, PoiError>;

/// Errors that can occur during a POI query
///
/// An empty result set is NOT an error: it comes back as `Ok(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub enum PoiError {
    /// Network or service failure
    QueryFailed(String),
}

impl std::fmt::Display for PoiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoiError::QueryFailed(msg) => write!(f, "POI query failed: {}", msg),
        }
    }
}

impl std::error::Error for PoiError {}

/// One tag constraint: key must exist, optionally with an exact value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    pub key: String,
    pub value: Option<String>,
}

/// A conjunction of tag constraints selecting a POI category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    matches: Vec<TagMatch>,
}

impl CategoryFilter {
    /// Build a filter from (key, value) and bare-key constraints
    pub fn new(matches: Vec<TagMatch>) -> Self {
        Self { matches }
    }

    /// Mosques: `amenity=place_of_worship` + `religion=muslim`
    pub fn mosques() -> Self {
        Self::new(vec![
            TagMatch {
                key: "amenity".to_string(),
                value: Some("place_of_worship".to_string()),
            },
            TagMatch {
                key: "religion".to_string(),
                value: Some("muslim".to_string()),
            },
        ])
    }

    /// Any amenity-tagged node (the secondary facility query)
    pub fn amenities() -> Self {
        Self::new(vec![TagMatch {
            key: "amenity".to_string(),
            value: None,
        }])
    }

    /// The individual tag constraints
    pub fn matches(&self) -> &[TagMatch] {
        &self.matches
    }
}

/// Trait for spatial POI queries
///
/// Geodata adapters implement this trait.
pub trait PoiSource {
    /// Find POIs matching `filter` within `radius_m` meters of `center`
    fn search(
        &self,
        filter: &CategoryFilter,
        center: &GeoPoint,
        radius_m: u32,
    ) -> PoiResult<Vec<RawPoi>>;
}
