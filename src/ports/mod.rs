//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! This is the hexagonal architecture boundary:
//! - Ports define WHAT operations are needed
//! - Adapters define HOW they're implemented
//!
//! The CORE doesn't know about adapters.
//! Adapters implement these port traits.

mod geocode;
mod locate;
mod poi;
mod present;

// Re-export traits
pub use geocode::Geocode;
pub use locate::Locate;
pub use poi::PoiSource;
pub use present::Present;

// Re-export types from locate
pub use locate::{LocateError, LocateResult};

// Re-export types from geocode
pub use geocode::{GeocodeError, GeocodeResult};

// Re-export types from poi
pub use poi::{CategoryFilter, PoiError, PoiResult, TagMatch};
