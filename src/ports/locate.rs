//! # Locate Port
//!
//! Trait for resolving the user's current position.
//!
//! `Locate: fn() -> GeoPoint` - Where am I?
//!
//! Implemented by location adapters (IP geolocation, fixed coordinates).

use crate::core::GeoPoint;

/// Result type for locate operations
pub type LocateResult<T> = Result<T, LocateError>;

/// Errors that can occur while resolving the current position
#[derive(Debug, Clone, PartialEq)]
pub enum LocateError {
    /// The user or platform denied access to location data
    PermissionDenied,

    /// No fix arrived within the deadline
    Timeout,

    /// No usable location source (sensor absent, service down)
    Unavailable(String),
}

impl std::fmt::Display for LocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocateError::PermissionDenied => write!(f, "Location access denied"),
            LocateError::Timeout => write!(f, "Timed out waiting for a location fix"),
            LocateError::Unavailable(msg) => write!(f, "Location unavailable: {}", msg),
        }
    }
}

impl std::error::Error for LocateError {}

/// Trait for resolving the current position
///
/// Location adapters implement this trait. One fix per call, no cached
/// reuse, no retry; the caller decides whether to ask again.
pub trait Locate {
    /// Resolve the current position
    fn current_position(&self) -> LocateResult<GeoPoint>;
}
