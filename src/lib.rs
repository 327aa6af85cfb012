//! # Minaret
//!
//! Find nearby mosques and amenities, ranked by distance.
//!
//! ## Overview
//!
//! Minaret resolves a reference location (IP fix, free-text search, or
//! explicit coordinates), queries OpenStreetMap-backed services for
//! nearby mosques, and produces a stable distance-ranked result list,
//! with optional per-result amenity sub-lists.
//!
//! The heavy lifting is delegated to external services (Overpass for
//! spatial queries, Nominatim for geocoding); the core of this crate is
//! the pure proximity ranking pipeline and the session state machine
//! that drives it.
//!
//! ## Key pieces
//!
//! - **Haversine distance**: great-circle km on a 6371 km sphere,
//!   behind a pluggable [`core::Distance`] trait
//! - **Stable ranking**: sort ascending by distance, ties keep input order
//! - **Session state machine**: `Idle → Locating → QueryingPrimary →
//!   Ranked`, with generation-guarded secondary fan-out
//!
//! ## Usage
//!
//! ```rust,ignore
//! use minaret::adapters::overpass::OverpassClient;
//! use minaret::core::{GeoPoint, Haversine, Session};
//! use minaret::ports::{CategoryFilter, PoiSource};
//!
//! let mut session = Session::new();
//! session.reposition(GeoPoint::new(40.7128, -74.0060)?);
//!
//! let overpass = OverpassClient::public();
//! let center = session.reference().unwrap();
//! let pois = overpass.search(&CategoryFilter::mosques(), &center, 5000)?;
//!
//! if let Some(notice) = session.primary_results(&pois, &Haversine) {
//!     eprintln!("{}", notice);
//! }
//! for item in session.results() {
//!     println!("{}: {:.2} km", item.poi.id, item.distance_km);
//! }
//! ```

pub mod adapters;
pub mod core;
pub mod ports;

// Re-exports for convenience
pub use crate::core::{GeoPoint, Haversine, RankedPoi, RawPoi, Session};
pub use crate::ports::{CategoryFilter, Geocode, Locate, PoiSource, Present};
