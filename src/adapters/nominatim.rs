//! Nominatim Integration
//!
//! Client for the Nominatim geocoding API, providing:
//! - Reverse geocoding (point -> place name) for the reference banner
//! - Forward geocoding (free text -> best-match point) for manual search
//!
//! Nominatim's usage policy requires an identifying User-Agent; requests
//! without one are rejected.
//!
//! # Example
//! ```rust,ignore
//! let client = NominatimClient::public();
//! let name = client.reverse(&point)?;
//! let mecca = client.forward("Mecca")?;
//! ```

use std::time::Duration;

use log::debug;
use serde::Deserialize;

use crate::core::GeoPoint;
use crate::ports::{Geocode, GeocodeError, GeocodeResult};

/// Reverse geocoding response (format=jsonv2)
#[derive(Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

/// One forward geocoding match (format=json)
///
/// Nominatim encodes coordinates as JSON strings, not numbers.
#[derive(Deserialize)]
struct SearchMatch {
    lat: String,
    lon: String,
}

/// Nominatim client errors
#[derive(Debug, thiserror::Error)]
pub enum NominatimError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Malformed coordinates in response: {0}")]
    BadCoordinates(String),
}

/// Nominatim API client
pub struct NominatimClient {
    host: String,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    /// Create a client against a specific Nominatim host
    pub fn new(host: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("minaret/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            host: host.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client against the public nominatim.openstreetmap.org instance
    pub fn public() -> Self {
        Self::new("https://nominatim.openstreetmap.org")
    }

    /// Check if the host answers at all
    pub fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/status", self.host))
            .timeout(Duration::from_secs(5))
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn reverse_name(&self, point: &GeoPoint) -> Result<String, NominatimError> {
        debug!("reverse geocoding {}", point);

        let response = self
            .client
            .get(format!("{}/reverse", self.host))
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", point.lat().to_string()),
                ("lon", point.lon().to_string()),
            ])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    NominatimError::Connection(format!("Cannot connect to {}", self.host))
                } else {
                    NominatimError::Request(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(NominatimError::Request(format!(
                "Status {}",
                response.status()
            )));
        }

        let reverse: ReverseResponse = response
            .json()
            .map_err(|e| NominatimError::Request(format!("Invalid response: {}", e)))?;

        reverse
            .display_name
            .ok_or_else(|| NominatimError::Request("No display_name in response".to_string()))
    }

    fn forward_match(&self, query: &str) -> Result<Option<GeoPoint>, NominatimError> {
        debug!("forward geocoding {:?}", query);

        let response = self
            .client
            .get(format!("{}/search", self.host))
            .query(&[("format", "json"), ("q", query), ("limit", "1")])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    NominatimError::Connection(format!("Cannot connect to {}", self.host))
                } else {
                    NominatimError::Request(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(NominatimError::Request(format!(
                "Status {}",
                response.status()
            )));
        }

        let matches: Vec<SearchMatch> = response
            .json()
            .map_err(|e| NominatimError::Request(format!("Invalid response: {}", e)))?;

        let best = match matches.into_iter().next() {
            Some(m) => m,
            None => return Ok(None),
        };

        let lat: f64 = best
            .lat
            .parse()
            .map_err(|_| NominatimError::BadCoordinates(best.lat.clone()))?;
        let lon: f64 = best
            .lon
            .parse()
            .map_err(|_| NominatimError::BadCoordinates(best.lon.clone()))?;

        let point = GeoPoint::new(lat, lon)
            .map_err(|e| NominatimError::BadCoordinates(e.to_string()))?;
        Ok(Some(point))
    }
}

impl Geocode for NominatimClient {
    fn reverse(&self, point: &GeoPoint) -> GeocodeResult<String> {
        self.reverse_name(point)
            .map_err(|e| GeocodeError::Backend(e.to_string()))
    }

    fn forward(&self, query: &str) -> GeocodeResult<GeoPoint> {
        match self.forward_match(query) {
            Ok(Some(point)) => Ok(point),
            Ok(None) => Err(GeocodeError::NotFound),
            Err(e) => Err(GeocodeError::Backend(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NominatimClient::new("https://nominatim.openstreetmap.org/");
        assert_eq!(client.host, "https://nominatim.openstreetmap.org");
    }

    #[test]
    fn test_decode_reverse_response() {
        let payload = r#"{
            "place_id": 134945180,
            "display_name": "New York, United States",
            "lat": "40.7127281",
            "lon": "-74.0060152"
        }"#;

        let reverse: ReverseResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(reverse.display_name.as_deref(), Some("New York, United States"));
    }

    #[test]
    fn test_decode_search_matches_string_coordinates() {
        // Nominatim sends lat/lon as strings
        let payload = r#"[{"lat": "21.4225", "lon": "39.8262", "display_name": "Mecca"}]"#;

        let matches: Vec<SearchMatch> = serde_json::from_str(payload).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].lat, "21.4225");
        assert_eq!(matches[0].lon.parse::<f64>().unwrap(), 39.8262);
    }

    #[test]
    fn test_decode_empty_search() {
        let matches: Vec<SearchMatch> = serde_json::from_str("[]").unwrap();
        assert!(matches.is_empty());
    }
}
