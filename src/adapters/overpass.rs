//! Overpass Integration
//!
//! Client for Overpass-style spatial query APIs, providing the primary
//! (mosque) and secondary (amenity) POI searches.
//!
//! # Example
//! ```rust,ignore
//! let client = OverpassClient::public();
//! let pois = client.search(&CategoryFilter::mosques(), &center, 5000)?;
//! ```

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use crate::core::{GeoPoint, PoiId, RawPoi};
use crate::ports::{CategoryFilter, PoiError, PoiResult, PoiSource};

/// Server-side query timeout, seconds (goes into the QL header)
const QUERY_TIMEOUT_S: u32 = 25;

/// One element of an Overpass JSON response
#[derive(Deserialize)]
struct Element {
    id: i64,
    lat: f64,
    lon: f64,
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// Overpass JSON response envelope
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    elements: Vec<Element>,
}

/// Overpass client errors
#[derive(Debug, thiserror::Error)]
pub enum OverpassError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Timeout after {0}s")]
    Timeout(u32),
}

/// Overpass API client
pub struct OverpassClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl OverpassClient {
    /// Create a client against a specific interpreter endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Interpreter URL (e.g., "https://overpass-api.de/api/interpreter")
    pub fn new(endpoint: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            // A little slack beyond the server-side timeout
            .timeout(Duration::from_secs(QUERY_TIMEOUT_S as u64 + 5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client against the public overpass-api.de instance
    pub fn public() -> Self {
        Self::new("https://overpass-api.de/api/interpreter")
    }

    /// Build the QL query for a filtered around-point node search
    pub fn build_query(filter: &CategoryFilter, center: &GeoPoint, radius_m: u32) -> String {
        let mut selector = String::from("node");
        for m in filter.matches() {
            match &m.value {
                Some(v) => selector.push_str(&format!("[\"{}\"=\"{}\"]", m.key, v)),
                None => selector.push_str(&format!("[\"{}\"]", m.key)),
            }
        }
        format!(
            "[out:json][timeout:{}];({}(around:{},{},{}););out body;",
            QUERY_TIMEOUT_S,
            selector,
            radius_m,
            center.lat(),
            center.lon()
        )
    }

    /// Check if the interpreter endpoint answers at all
    pub fn is_available(&self) -> bool {
        self.client
            .get(&self.endpoint)
            .query(&[("data", "[out:json];out;")])
            .timeout(Duration::from_secs(5))
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn run(&self, query: &str) -> Result<Vec<RawPoi>, OverpassError> {
        debug!("overpass query: {}", query);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("data", query)])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    OverpassError::Connection(format!(
                        "Cannot connect to Overpass at {}",
                        self.endpoint
                    ))
                } else if e.is_timeout() {
                    OverpassError::Timeout(QUERY_TIMEOUT_S)
                } else {
                    OverpassError::Request(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(OverpassError::Request(format!(
                "Status {}",
                response.status()
            )));
        }

        let envelope: Envelope = response
            .json()
            .map_err(|e| OverpassError::Request(format!("Invalid response: {}", e)))?;

        let mut pois = Vec::with_capacity(envelope.elements.len());
        for element in envelope.elements {
            match GeoPoint::new(element.lat, element.lon) {
                Ok(location) => {
                    pois.push(RawPoi::new(PoiId::new(element.id), location, element.tags))
                }
                Err(e) => {
                    // A malformed element must not sink the whole result set
                    warn!("skipping element {}: {}", element.id, e);
                }
            }
        }

        debug!("overpass returned {} usable elements", pois.len());
        Ok(pois)
    }
}

impl PoiSource for OverpassClient {
    fn search(
        &self,
        filter: &CategoryFilter,
        center: &GeoPoint,
        radius_m: u32,
    ) -> PoiResult<Vec<RawPoi>> {
        let query = Self::build_query(filter, center, radius_m);
        self.run(&query)
            .map_err(|e| PoiError::QueryFailed(e.to_string()))
    }
}
