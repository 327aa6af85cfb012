//! # Present Port
//!
//! Trait for rendering results to the user.
//!
//! `Present: fn(ranked) -> ()` - Show me.
//!
//! Implemented by presentation adapters (console). Facility sub-lists
//! arrive per item, asynchronously and in no particular order; each
//! call targets one slot keyed by the item's id.

use crate::core::{GeoPoint, Notice, PoiId, RankedPoi};

/// Trait for rendering session output
///
/// Presentation adapters implement this trait. Rendering is
/// best-effort and infallible from the caller's perspective.
pub trait Present {
    /// Announce the resolved reference point and its place name
    fn show_reference(&mut self, point: &GeoPoint, place_name: &str);

    /// Render the full ranked result list
    fn show_results(&mut self, results: &[RankedPoi]);

    /// Render the facility sub-list for one ranked item
    fn show_facilities(&mut self, item: PoiId, facilities: &[RankedPoi]);

    /// Surface a non-blocking notice
    fn show_notice(&mut self, notice: Notice);
}
