//! Location Adapters
//!
//! A terminal has no geolocation sensor, so "current position" comes
//! from one of two places:
//! - `IpLocateClient` - coarse IP geolocation via ip-api.com
//! - `FixedLocate` - coordinates the user supplied explicitly
//!
//! Both implement the [`Locate`] port. One fix per call, 10 second
//! deadline, no cached reuse, no retry.

use std::time::Duration;

use log::debug;
use serde::Deserialize;

use crate::core::GeoPoint;
use crate::ports::{Locate, LocateError, LocateResult};

/// ip-api.com JSON response
#[derive(Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

/// IP-geolocation location provider
pub struct IpLocateClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl IpLocateClient {
    /// Create a client against a specific endpoint
    pub fn new(endpoint: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client against the public ip-api.com instance
    pub fn public() -> Self {
        Self::new("http://ip-api.com/json")
    }
}

impl Locate for IpLocateClient {
    fn current_position(&self) -> LocateResult<GeoPoint> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    LocateError::Timeout
                } else {
                    LocateError::Unavailable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(LocateError::Unavailable(format!(
                "Status {}",
                response.status()
            )));
        }

        let body: IpApiResponse = response
            .json()
            .map_err(|e| LocateError::Unavailable(format!("Invalid response: {}", e)))?;

        if body.status != "success" {
            return Err(LocateError::Unavailable(
                body.message.unwrap_or_else(|| "lookup failed".to_string()),
            ));
        }

        let point = GeoPoint::new(body.lat, body.lon)
            .map_err(|e| LocateError::Unavailable(e.to_string()))?;
        debug!("IP fix: {}", point);
        Ok(point)
    }
}

/// Location provider that always yields one fixed point
///
/// Backs the `--lat/--lon` flags and the marker-reposition path.
pub struct FixedLocate {
    point: GeoPoint,
}

impl FixedLocate {
    pub fn new(point: GeoPoint) -> Self {
        Self { point }
    }
}

impl Locate for FixedLocate {
    fn current_position(&self) -> LocateResult<GeoPoint> {
        Ok(self.point)
    }
}
