//! Weather provider configuration.

use std::time::Duration;

/// Default Open-Meteo forecast endpoint.
pub const DEFAULT_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Default request deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 8000;

/// Settings for the live weather provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    /// When false, no request is ever made and every run is estimated.
    pub enabled: bool,
    /// Forecast endpoint URL, without query string.
    pub api_url: String,
    /// Per-request deadline.
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}
