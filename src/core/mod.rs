//! # Core Domain
//!
//! Pure geodesy and ranking, no I/O. The foundation of the finder.
//!
//! This module contains the fundamental types and operations:
//! - `GeoPoint` - A validated position on the Earth's surface
//! - `RawPoi` / `RankedPoi` - Source records and their ranked derivations
//! - `Distance` - Trait for great-circle distance functions
//! - `rank` - The proximity ranking pipeline
//! - `Session` - The event-driven session state machine
//!
//! ## Design Principles
//!
//! - All functions are pure (deterministic, no side effects)
//! - No I/O operations
//! - No external dependencies beyond std
//! - Fully testable in isolation

mod point;
mod poi;
mod rank;
pub mod config;
pub mod distance;
pub mod label;
pub mod session;

// Re-exports
pub use config::FinderConfig;
pub use distance::{Distance, Equirectangular, Haversine, EARTH_RADIUS_KM};
pub use point::{CoordinateError, GeoPoint};
pub use poi::{PoiId, RankedPoi, RawPoi, Tags};
pub use rank::rank;
pub use session::{Notice, Phase, SecondaryOutcome, Session};
