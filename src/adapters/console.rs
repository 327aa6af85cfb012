//! Console Presentation
//!
//! Renders ranked results and facility sub-lists as a plain-text list
//! on stdout; notices go to stderr so piped output stays clean.

use crate::core::label::{self, UNNAMED_FACILITY, UNNAMED_MOSQUE};
use crate::core::{GeoPoint, Notice, PoiId, RankedPoi};
use crate::ports::Present;

/// Format a distance for display: meters under 1 km, else kilometers
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{:.2} km", km)
    }
}

/// Console presentation adapter
#[derive(Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Present for ConsolePresenter {
    fn show_reference(&mut self, point: &GeoPoint, place_name: &str) {
        println!("You are here: {}", place_name);
        println!("  {}", point);
        println!();
    }

    fn show_results(&mut self, results: &[RankedPoi]) {
        println!("══════════════════════════════════════════════════════");
        println!("  Nearby mosques ({})", results.len());
        println!("══════════════════════════════════════════════════════");
        for item in results {
            println!(
                "  {:>2}. {}  [{}]",
                item.rank + 1,
                label::display_name(&item.poi.tags, UNNAMED_MOSQUE),
                format_distance(item.distance_km),
            );
        }
        println!();
    }

    fn show_facilities(&mut self, item: PoiId, facilities: &[RankedPoi]) {
        println!("  Facilities near #{}:", item);
        if facilities.is_empty() {
            println!("      (none in range)");
            return;
        }
        for facility in facilities {
            println!(
                "      - {} ({}, {})",
                label::display_name(&facility.poi.tags, UNNAMED_FACILITY),
                label::display_type(&facility.poi.tags),
                format_distance(facility.distance_km),
            );
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        eprintln!("{}", notice);
    }
}
