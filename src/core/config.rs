//! # Configuration
//!
//! Finder configuration - define your search.
//!
//! Everything is configurable, not hardcoded:
//! - Search radius
//! - Distance function
//! - Result list cap
//! - Secondary facility fan-out

use std::sync::Arc;

use super::distance::{Distance, Haversine};

/// Main finder configuration
///
/// Defines the search radii and default operations.
#[derive(Clone)]
pub struct FinderConfig {
    /// Primary search radius around the reference point, meters
    pub radius_m: u32,

    /// Secondary (facility) search radius around each ranked item, meters
    pub facility_radius_m: u32,

    /// Distance function for ranking
    pub distance: Arc<dyn Distance>,

    /// Maximum number of ranked results to keep/present
    pub limit: usize,

    /// How many of the top ranked items get a secondary facility
    /// query (0 disables the fan-out)
    pub facility_fanout: usize,
}

impl FinderConfig {
    /// Create a configuration with the given primary radius
    ///
    /// Uses the default distance function (Haversine).
    pub fn new(radius_m: u32) -> Self {
        Self {
            radius_m,
            facility_radius_m: 500,
            distance: Arc::new(Haversine),
            limit: 20,
            facility_fanout: 3,
        }
    }

    /// Set a custom distance function
    pub fn with_distance<D: Distance + 'static>(mut self, distance: D) -> Self {
        self.distance = Arc::new(distance);
        self
    }

    /// Set the secondary facility radius
    pub fn with_facility_radius(mut self, radius_m: u32) -> Self {
        self.facility_radius_m = radius_m;
        self
    }

    /// Set the result list cap
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the secondary fan-out count
    pub fn with_facility_fanout(mut self, fanout: usize) -> Self {
        self.facility_fanout = fanout;
        self
    }
}

impl Default for FinderConfig {
    /// Default configuration: 5 km primary radius, Haversine distance
    fn default() -> Self {
        Self::new(5000)
    }
}
