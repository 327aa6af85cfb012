//! # Distance
//!
//! Trait and implementations for measuring how far apart two points are.
//!
//! `Distance: fn(a, b) -> km` - How far?
//!
//! Distance functions are pluggable - use whichever fits your use case.

use super::GeoPoint;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Trait for measuring great-circle distance between points
///
/// All implementations return kilometers, are symmetric, and return 0
/// for identical coordinates. `GeoPoint` validation guarantees the
/// result is finite and non-negative.
pub trait Distance: Send + Sync {
    /// Compute the distance between two points, in kilometers
    fn distance_km(&self, a: &GeoPoint, b: &GeoPoint) -> f64;

    /// Name of this distance function (for debugging/config)
    fn name(&self) -> &'static str;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Haversine great-circle distance
///
/// Treats the Earth as a sphere of radius 6371 km. Accurate to about
/// 0.5% (the spherical-Earth error), numerically stable for both
/// antipodal and very close point pairs.
///
/// Best for: the default. Use this unless profiling says otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct Haversine;

impl Distance for Haversine {
    fn distance_km(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        let d_lat = (b.lat() - a.lat()).to_radians();
        let d_lon = (b.lon() - a.lon()).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + a.lat_rad().cos() * b.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS_KM * c
    }

    fn name(&self) -> &'static str {
        "haversine"
    }
}

/// Equirectangular approximation
///
/// Projects the two points onto a flat plane and takes the Euclidean
/// distance. Much cheaper than Haversine but degrades as the span
/// grows or near the poles.
///
/// Best for: rankings over small radii where only the ordering matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Equirectangular;

impl Distance for Equirectangular {
    fn distance_km(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        let mean_lat = (a.lat_rad() + b.lat_rad()) / 2.0;
        let x = (b.lon_rad() - a.lon_rad()) * mean_lat.cos();
        let y = b.lat_rad() - a.lat_rad();

        EARTH_RADIUS_KM * (x * x + y * y).sqrt()
    }

    fn name(&self) -> &'static str {
        "equirectangular"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_haversine_identical_points() {
        let new_york = p(40.7128, -74.0060);
        assert_eq!(Haversine.distance_km(&new_york, &new_york), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_at_equator() {
        // One degree of latitude or longitude at the equator is ~111.19 km
        let origin = p(0.0, 0.0);
        let east = p(0.0, 1.0);
        let north = p(1.0, 0.0);

        assert!((Haversine.distance_km(&origin, &east) - 111.19).abs() < 0.1);
        assert!((Haversine.distance_km(&origin, &north) - 111.19).abs() < 0.1);
    }

    #[test]
    fn test_haversine_symmetry() {
        let london = p(51.5074, -0.1278);
        let mecca = p(21.4225, 39.8262);

        let ab = Haversine.distance_km(&london, &mecca);
        let ba = Haversine.distance_km(&mecca, &london);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_known_distance() {
        // London to Paris is ~343.5 km great-circle
        let london = p(51.5074, -0.1278);
        let paris = p(48.8566, 2.3522);

        let d = Haversine.distance_km(&london, &paris);
        assert!((d - 343.5).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_haversine_antipodal() {
        // Antipodal points are half the Earth's circumference apart
        let a = p(0.0, 0.0);
        let b = p(0.0, 180.0);

        let d = Haversine.distance_km(&a, &b);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_non_negative() {
        let points = [
            p(90.0, 0.0),
            p(-90.0, 0.0),
            p(0.0, 180.0),
            p(0.0, -180.0),
            p(40.7128, -74.0060),
        ];
        for a in &points {
            for b in &points {
                assert!(Haversine.distance_km(a, b) >= 0.0);
            }
        }
    }

    #[test]
    fn test_equirectangular_close_to_haversine_at_small_spans() {
        let a = p(52.2297, 21.0122);
        let b = p(52.2300, 21.0500);

        let exact = Haversine.distance_km(&a, &b);
        let approx = Equirectangular.distance_km(&a, &b);
        assert!((exact - approx).abs() < 0.01, "{} vs {}", exact, approx);
    }

    #[test]
    fn test_distance_names() {
        assert_eq!(Haversine.name(), "haversine");
        assert_eq!(Equirectangular.name(), "equirectangular");
    }
}
