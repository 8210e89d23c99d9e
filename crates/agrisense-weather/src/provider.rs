//! The weather provider seen by the engine.
//!
//! Uses enum dispatch rather than a trait object so the async fetch stays
//! a plain `async fn`.

use agrisense_types::{Coordinate, CurrentConditions};

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::openmeteo::OpenMeteoClient;

/// Source of current surface conditions.
#[derive(Debug, Clone)]
pub enum WeatherProvider {
    /// Live Open-Meteo API.
    OpenMeteo(OpenMeteoClient),
    /// A canned reading returned for every coordinate (replay, offline).
    Fixed(CurrentConditions),
    /// No provider; every synthesis uses the formula estimate.
    Disabled,
}

impl WeatherProvider {
    /// Build the provider described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Request`] if the HTTP client cannot be built.
    pub fn from_config(config: &WeatherConfig) -> Result<Self, WeatherError> {
        if !config.enabled {
            return Ok(Self::Disabled);
        }
        OpenMeteoClient::new(config.api_url.clone(), config.timeout).map(Self::OpenMeteo)
    }

    /// Fetch current conditions at `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Disabled`] for the disabled provider, and
    /// whatever the live client reports otherwise.
    pub async fn current_conditions(
        &self,
        coordinate: &Coordinate,
    ) -> Result<CurrentConditions, WeatherError> {
        match self {
            Self::OpenMeteo(client) => client.current_conditions(coordinate).await,
            Self::Fixed(conditions) => Ok(*conditions),
            Self::Disabled => Err(WeatherError::Disabled),
        }
    }

    /// Whether calling [`current_conditions`](Self::current_conditions) can
    /// ever succeed.
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::OpenMeteo(_) => "open-meteo",
            Self::Fixed(_) => "fixed",
            Self::Disabled => "disabled",
        }
    }
}
