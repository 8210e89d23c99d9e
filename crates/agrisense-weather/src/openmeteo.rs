//! Open-Meteo current-conditions client.
//!
//! Issues one `GET` per call against the forecast endpoint asking only for
//! the `current` block:
//!
//! ```text
//! {api_url}?latitude=..&longitude=..&current=temperature_2m,relative_humidity_2m,
//!     soil_temperature_0cm,soil_moisture_0_to_1cm&timezone=auto
//! ```
//!
//! No retries. The client-level timeout bounds the whole request; the
//! engine adds its own deadline on top.

use std::time::Duration;

use agrisense_types::{Coordinate, CurrentConditions};
use tracing::debug;

use crate::error::WeatherError;

/// Variables requested in the `current` block.
pub const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,soil_temperature_0cm,soil_moisture_0_to_1cm";

/// HTTP client for the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    api_url: String,
}

impl OpenMeteoClient {
    /// Create a client for `api_url` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Request`] if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Request(format!("client build failed: {e}")))?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Full request URL for `coordinate`.
    pub fn request_url(&self, coordinate: &Coordinate) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={CURRENT_FIELDS}&timezone=auto",
            self.api_url, coordinate.latitude, coordinate.longitude
        )
    }

    /// Fetch current conditions at `coordinate`.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::Request`] on transport failure or client timeout.
    /// - [`WeatherError::Status`] on a non-2xx response.
    /// - [`WeatherError::Malformed`] if the body is not JSON or lacks a
    ///   usable `current` block.
    pub async fn current_conditions(
        &self,
        coordinate: &Coordinate,
    ) -> Result<CurrentConditions, WeatherError> {
        let url = self.request_url(coordinate);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WeatherError::Malformed(format!("response is not JSON: {e}")))?;

        let conditions = parse_current(&json)?;
        debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            temperature = conditions.temperature_c,
            humidity = conditions.humidity_pct,
            "live conditions received"
        );
        Ok(conditions)
    }
}

/// Extract [`CurrentConditions`] from a forecast response body.
///
/// # Errors
///
/// Returns [`WeatherError::Malformed`] if `current` is missing, has
/// wrongly typed fields, or carries none of the requested variables. A block
/// with only soil readings is kept so their moisture still reaches the
/// profile.
pub fn parse_current(json: &serde_json::Value) -> Result<CurrentConditions, WeatherError> {
    let current = json
        .get("current")
        .filter(|c| c.is_object())
        .ok_or_else(|| WeatherError::Malformed("response missing current block".to_owned()))?;

    let conditions: CurrentConditions = serde_json::from_value(current.clone())
        .map_err(|e| WeatherError::Malformed(format!("current block: {e}")))?;

    if conditions == CurrentConditions::default() {
        return Err(WeatherError::Malformed(
            "current block has none of the requested variables".to_owned(),
        ));
    }

    Ok(conditions)
}
