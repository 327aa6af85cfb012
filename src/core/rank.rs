//! # Ranking Pipeline
//!
//! The reproducible core: distance per POI, stable sort ascending,
//! rank assignment. Pure - inputs are never mutated, output is a fresh
//! derived sequence.

use super::distance::Distance;
use super::poi::{RankedPoi, RawPoi};
use super::GeoPoint;

/// Rank POIs by distance from a reference point
///
/// Produces a new sequence sorted ascending by `distance_km`. The sort
/// is stable: POIs at exactly equal distance keep their input order.
/// `rank` is the final 0-based index. Empty input yields empty output.
///
/// # Example
/// ```
/// use minaret::core::{rank, GeoPoint, Haversine, PoiId, RawPoi, Tags};
///
/// let home = GeoPoint::new(0.0, 0.0).unwrap();
/// let pois = vec![
///     RawPoi::new(PoiId::new(1), GeoPoint::new(0.0, 2.0).unwrap(), Tags::new()),
///     RawPoi::new(PoiId::new(2), GeoPoint::new(0.0, 1.0).unwrap(), Tags::new()),
/// ];
///
/// let ranked = rank(&home, &pois, &Haversine);
/// assert_eq!(ranked[0].poi.id, PoiId::new(2));
/// assert_eq!(ranked[0].rank, 0);
/// ```
pub fn rank(reference: &GeoPoint, pois: &[RawPoi], distance: &dyn Distance) -> Vec<RankedPoi> {
    let mut ranked: Vec<RankedPoi> = pois
        .iter()
        .map(|poi| RankedPoi {
            poi: poi.clone(),
            distance_km: distance.distance_km(reference, &poi.location),
            rank: 0,
        })
        .collect();

    // Vec::sort_by is stable; total_cmp is fine because GeoPoint
    // validation keeps distances finite.
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    for (i, item) in ranked.iter_mut().enumerate() {
        item.rank = i;
    }

    ranked
}
