//! # Session
//!
//! The session state machine: `Idle → Locating → QueryingPrimary →
//! Ranked`, with per-item secondary facility queries fanned out from
//! `Ranked`.
//!
//! Pure by design - the driver performs the actual location fixes and
//! network queries and feeds the outcomes in as events. The session
//! owns the single reference location and the ranked result list, so
//! there is never ambiguity about which event last wrote them.
//!
//! Every change of reference point bumps a generation counter.
//! Secondary facility results carry the generation they were requested
//! under; a response from a superseded generation is discarded instead
//! of rendered.

use std::collections::HashMap;

use super::distance::Distance;
use super::poi::{PoiId, RankedPoi, RawPoi};
use super::rank::rank;
use super::GeoPoint;

/// Where the session currently is in its event cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight
    Idle,

    /// Waiting for a location fix or a geocoder answer
    Locating,

    /// Waiting for the primary POI query
    QueryingPrimary,

    /// Primary results ranked; secondary queries may fan out
    Ranked,
}

/// User-visible, non-blocking notice raised by a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Location fix failed or was denied
    LocationUnavailable,

    /// Manual search matched nothing
    LocationNotFound,

    /// Primary query returned an empty set
    NoMosquesNearby,

    /// Primary query failed outright
    QueryFailed,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::LocationUnavailable => write!(f, "Unable to retrieve your location."),
            Notice::LocationNotFound => write!(f, "Location not found. Please try again."),
            Notice::NoMosquesNearby => write!(f, "No mosques found nearby."),
            Notice::QueryFailed => write!(f, "Could not reach the map data service."),
        }
    }
}

/// Outcome of feeding in a secondary facility response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondaryOutcome {
    /// Stored under the item's slot
    Accepted,

    /// Response belongs to a superseded reference point
    StaleGeneration,

    /// Item id is not in the current ranked list
    UnknownItem,
}

/// Single-session state: reference point, ranked results, facility slots
pub struct Session {
    phase: Phase,
    reference: Option<GeoPoint>,
    last_results: Vec<RankedPoi>,
    facilities: HashMap<PoiId, Vec<RankedPoi>>,
    generation: u64,
}

impl Session {
    /// Create an idle session with no reference point
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            reference: None,
            last_results: Vec::new(),
            facilities: HashMap::new(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current reference point, if one has been fixed
    pub fn reference(&self) -> Option<GeoPoint> {
        self.reference
    }

    /// Ranked results from the last successful primary query
    ///
    /// Always sorted ascending by `distance_km`, ties in input order.
    pub fn results(&self) -> &[RankedPoi] {
        &self.last_results
    }

    /// Generation under which secondary queries must be issued
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Facility sub-list for a ranked item, if its query has resolved
    pub fn facilities_for(&self, id: PoiId) -> Option<&[RankedPoi]> {
        self.facilities.get(&id).map(Vec::as_slice)
    }

    /// A user action asked for the current position or a manual search
    pub fn request_location(&mut self) {
        self.phase = Phase::Locating;
    }

    /// Location resolved; move on to the primary POI query
    ///
    /// Bumps the generation so in-flight secondary responses for the
    /// old reference point are rejected on arrival.
    pub fn location_fixed(&mut self, point: GeoPoint) {
        self.reference = Some(point);
        self.generation += 1;
        self.facilities.clear();
        self.phase = Phase::QueryingPrimary;
    }

    /// Location resolution failed or was denied; no retry
    pub fn location_failed(&mut self) -> Notice {
        self.phase = Phase::Idle;
        Notice::LocationUnavailable
    }

    /// Manual search matched nothing; no retry
    pub fn location_not_found(&mut self) -> Notice {
        self.phase = Phase::Idle;
        Notice::LocationNotFound
    }

    /// Marker reposition: re-rank against the new point directly,
    /// without a new location fix
    pub fn reposition(&mut self, point: GeoPoint) {
        self.reference = Some(point);
        self.generation += 1;
        self.facilities.clear();
        self.phase = Phase::QueryingPrimary;
    }

    /// Primary POI query resolved
    ///
    /// Ranks the set against the current reference. An empty set is a
    /// valid response: it clears `last_results` and surfaces a notice.
    pub fn primary_results(
        &mut self,
        pois: &[RawPoi],
        distance: &dyn Distance,
    ) -> Option<Notice> {
        let reference = match self.reference {
            Some(r) => r,
            None => {
                // No reference point means the driver skipped
                // location_fixed; treat as a failed query.
                self.phase = Phase::Idle;
                self.last_results.clear();
                return Some(Notice::QueryFailed);
            }
        };

        if pois.is_empty() {
            self.last_results.clear();
            self.phase = Phase::Idle;
            return Some(Notice::NoMosquesNearby);
        }

        self.last_results = rank(&reference, pois, distance);
        self.phase = Phase::Ranked;
        None
    }

    /// Primary POI query failed; prior results are dropped
    pub fn primary_failed(&mut self) -> Notice {
        self.last_results.clear();
        self.phase = Phase::Idle;
        Notice::QueryFailed
    }

    /// A secondary facility query resolved for one ranked item
    ///
    /// Each response lands in its own slot; a slow or failed query for
    /// one item never touches another. Responses from a superseded
    /// generation or for an id no longer in the list are discarded.
    pub fn secondary_results(
        &mut self,
        id: PoiId,
        generation: u64,
        facilities: &[RawPoi],
        distance: &dyn Distance,
    ) -> SecondaryOutcome {
        if generation != self.generation {
            return SecondaryOutcome::StaleGeneration;
        }

        let item = match self.last_results.iter().find(|r| r.poi.id == id) {
            Some(item) => item,
            None => return SecondaryOutcome::UnknownItem,
        };

        // Facilities are ranked around the item they belong to, not
        // around the session reference.
        let ranked = rank(&item.poi.location, facilities, distance);
        self.facilities.insert(id, ranked);
        SecondaryOutcome::Accepted
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance::Haversine;
    use crate::core::poi::Tags;

    fn poi(id: i64, lat: f64, lon: f64) -> RawPoi {
        RawPoi::new(
            PoiId::new(id),
            GeoPoint::new(lat, lon).unwrap(),
            Tags::new(),
        )
    }

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.reference().is_none());
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_happy_path_transitions() {
        let mut session = Session::new();

        session.request_location();
        assert_eq!(session.phase(), Phase::Locating);

        session.location_fixed(point(0.0, 0.0));
        assert_eq!(session.phase(), Phase::QueryingPrimary);
        assert_eq!(session.reference(), Some(point(0.0, 0.0)));

        let notice = session.primary_results(&[poi(1, 0.0, 1.0)], &Haversine);
        assert!(notice.is_none());
        assert_eq!(session.phase(), Phase::Ranked);
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn test_location_failure_returns_to_idle() {
        let mut session = Session::new();
        session.request_location();

        let notice = session.location_failed();
        assert_eq!(notice, Notice::LocationUnavailable);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(format!("{}", notice), "Unable to retrieve your location.");
    }

    #[test]
    fn test_empty_primary_clears_results() {
        let mut session = Session::new();
        session.request_location();
        session.location_fixed(point(0.0, 0.0));
        session.primary_results(&[poi(1, 0.0, 1.0)], &Haversine);
        assert_eq!(session.results().len(), 1);

        // A later query from a new point comes back empty
        session.reposition(point(50.0, 50.0));
        let notice = session.primary_results(&[], &Haversine);
        assert_eq!(notice, Some(Notice::NoMosquesNearby));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_primary_failure_clears_results() {
        let mut session = Session::new();
        session.request_location();
        session.location_fixed(point(0.0, 0.0));
        session.primary_results(&[poi(1, 0.0, 1.0)], &Haversine);

        let notice = session.primary_failed();
        assert_eq!(notice, Notice::QueryFailed);
        assert!(session.results().is_empty());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_reposition_skips_locating() {
        let mut session = Session::new();
        session.reposition(point(10.0, 20.0));

        assert_eq!(session.phase(), Phase::QueryingPrimary);
        assert_eq!(session.reference(), Some(point(10.0, 20.0)));
    }

    #[test]
    fn test_reposition_bumps_generation() {
        let mut session = Session::new();
        let g0 = session.generation();

        session.reposition(point(10.0, 20.0));
        assert_eq!(session.generation(), g0 + 1);

        session.location_fixed(point(11.0, 21.0));
        assert_eq!(session.generation(), g0 + 2);
    }

    #[test]
    fn test_secondary_results_accepted() {
        let mut session = Session::new();
        session.reposition(point(0.0, 0.0));
        session.primary_results(&[poi(1, 0.0, 1.0)], &Haversine);

        let generation = session.generation();
        let outcome = session.secondary_results(
            PoiId::new(1),
            generation,
            &[poi(100, 0.0, 1.001), poi(101, 0.0, 1.01)],
            &Haversine,
        );

        assert_eq!(outcome, SecondaryOutcome::Accepted);
        let slot = session.facilities_for(PoiId::new(1)).unwrap();
        assert_eq!(slot.len(), 2);
        // Ranked around the item, nearest first
        assert_eq!(slot[0].poi.id, PoiId::new(100));
    }

    #[test]
    fn test_stale_secondary_discarded() {
        let mut session = Session::new();
        session.reposition(point(0.0, 0.0));
        session.primary_results(&[poi(1, 0.0, 1.0)], &Haversine);
        let old_generation = session.generation();

        // User moves the marker before the secondary query resolves
        session.reposition(point(5.0, 5.0));
        session.primary_results(&[poi(1, 5.0, 5.1)], &Haversine);

        let outcome = session.secondary_results(
            PoiId::new(1),
            old_generation,
            &[poi(100, 0.0, 1.001)],
            &Haversine,
        );

        assert_eq!(outcome, SecondaryOutcome::StaleGeneration);
        assert!(session.facilities_for(PoiId::new(1)).is_none());
    }

    #[test]
    fn test_secondary_for_unknown_item_discarded() {
        let mut session = Session::new();
        session.reposition(point(0.0, 0.0));
        session.primary_results(&[poi(1, 0.0, 1.0)], &Haversine);

        let outcome = session.secondary_results(
            PoiId::new(999),
            session.generation(),
            &[poi(100, 0.0, 1.001)],
            &Haversine,
        );

        assert_eq!(outcome, SecondaryOutcome::UnknownItem);
    }

    #[test]
    fn test_reference_change_drops_facility_slots() {
        let mut session = Session::new();
        session.reposition(point(0.0, 0.0));
        session.primary_results(&[poi(1, 0.0, 1.0)], &Haversine);
        session.secondary_results(
            PoiId::new(1),
            session.generation(),
            &[poi(100, 0.0, 1.001)],
            &Haversine,
        );
        assert!(session.facilities_for(PoiId::new(1)).is_some());

        session.reposition(point(5.0, 5.0));
        assert!(session.facilities_for(PoiId::new(1)).is_none());
    }

    #[test]
    fn test_primary_without_reference_is_query_failure() {
        let mut session = Session::new();
        let notice = session.primary_results(&[poi(1, 0.0, 1.0)], &Haversine);
        assert_eq!(notice, Some(Notice::QueryFailed));
        assert_eq!(session.phase(), Phase::Idle);
    }
}
