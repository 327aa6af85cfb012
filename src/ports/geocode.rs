//! # Geocode Port
//!
//! Traits for translating between coordinates and place names.
//!
//! `Geocode: fn(point) -> name, fn(query) -> point` - What's here? Where's that?
//!
//! Implemented by geocoder adapters (Nominatim).

use crate::core::GeoPoint;

/// Result type for geocode operations
pub type GeocodeResult<T> = Result<T, GeocodeError>;

/// Errors that can occur during geocoding
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeError {
    /// The query matched no place
    NotFound,

    /// The geocoding service failed or returned garbage
    Backend(String),
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeocodeError::NotFound => write!(f, "Location not found"),
            GeocodeError::Backend(msg) => write!(f, "Geocoder error: {}", msg),
        }
    }
}

impl std::error::Error for GeocodeError {}

/// Trait for forward and reverse geocoding
///
/// Geocoder adapters implement this trait.
pub trait Geocode {
    /// Resolve a point to a human-readable place name
    ///
    /// Callers should treat failure as cosmetic and fall back to a
    /// placeholder name rather than aborting.
    fn reverse(&self, point: &GeoPoint) -> GeocodeResult<String>;

    /// Resolve a free-text query to its single best-match point
    ///
    /// Returns [`GeocodeError::NotFound`] when nothing matches.
    fn forward(&self, query: &str) -> GeocodeResult<GeoPoint>;
}
