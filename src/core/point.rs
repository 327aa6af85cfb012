//! # GeoPoint
//!
//! A position on the Earth's surface. The fundamental primitive.
//!
//! Coordinates are WGS84 decimal degrees, latitude in [-90, 90] and
//! longitude in [-180, 180]. Validation happens at construction, so a
//! `GeoPoint` in hand is always usable: distance math downstream never
//! has to re-check for NaN or out-of-range values.

/// Error raised for coordinates outside the valid WGS84 ranges, or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    /// Latitude outside [-90, 90], or NaN
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180], or NaN
    InvalidLongitude(f64),
}

impl std::fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateError::InvalidLatitude(v) => {
                write!(f, "Invalid latitude: {} (must be in [-90, 90])", v)
            }
            CoordinateError::InvalidLongitude(v) => {
                write!(f, "Invalid longitude: {} (must be in [-180, 180])", v)
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// A validated point on the Earth's surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a new point from decimal-degree coordinates
    ///
    /// # Example
    /// ```
    /// use minaret::core::GeoPoint;
    /// let p = GeoPoint::new(40.7128, -74.0060).unwrap();
    /// assert_eq!(p.lat(), 40.7128);
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if lat.is_nan() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::InvalidLatitude(lat));
        }
        if lon.is_nan() || !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in radians
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_point() {
        let p = GeoPoint::new(40.7128, -74.0060).unwrap();
        assert_eq!(p.lat(), 40.7128);
        assert_eq!(p.lon(), -74.0060);
    }

    #[test]
    fn test_poles_and_antimeridian_are_valid() {
        assert!(GeoPoint::new(90.0, 0.0).is_ok());
        assert!(GeoPoint::new(-90.0, 0.0).is_ok());
        assert!(GeoPoint::new(0.0, 180.0).is_ok());
        assert!(GeoPoint::new(0.0, -180.0).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        match GeoPoint::new(90.5, 0.0) {
            Err(CoordinateError::InvalidLatitude(v)) => assert_eq!(v, 90.5),
            other => panic!("Expected InvalidLatitude, got {:?}", other),
        }
    }

    #[test]
    fn test_longitude_out_of_range() {
        match GeoPoint::new(0.0, -181.0) {
            Err(CoordinateError::InvalidLongitude(v)) => assert_eq!(v, -181.0),
            other => panic!("Expected InvalidLongitude, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_rejected() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_radians() {
        let p = GeoPoint::new(90.0, 0.0).unwrap();
        assert!((p.lat_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let p = GeoPoint::new(40.7128, -74.0060).unwrap();
        assert_eq!(format!("{}", p), "(40.7128, -74.0060)");
    }
}
