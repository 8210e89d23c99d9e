//! The soil profile engine: live weather with a deadline, then synthesis.
//!
//! One call to [`SoilProfileEngine::synthesize_soil_profile`]:
//!
//! 1. Validate the coordinate.
//! 2. Ask the weather provider for current conditions under
//!    `tokio::time::timeout`.
//! 3. On success use the reading; on timeout, transport, status or payload
//!    failure log a warning and continue with the formula estimate.
//! 4. Run the pure synthesis pipeline.
//!
//! The engine holds no mutable state, so one instance can serve any number
//! of concurrent calls behind an `Arc`.

use std::time::Duration;

use agrisense_soil::{synthesize, validate_coordinate};
use agrisense_types::{Coordinate, CurrentConditions, SoilProfile, WeatherSource};
use agrisense_weather::WeatherProvider;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::calendar::Calendar;
use crate::config::AgrisenseConfig;
use crate::error::EngineError;

/// Profile plus where its weather inputs came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisReport {
    /// The synthesized profile.
    pub profile: SoilProfile,
    /// Whether a live reading was used.
    pub weather_source: WeatherSource,
}

/// Asynchronous entry point for soil profile synthesis.
#[derive(Debug, Clone)]
pub struct SoilProfileEngine {
    provider: WeatherProvider,
    weather_timeout: Duration,
    calendar: Calendar,
}

impl SoilProfileEngine {
    /// Create an engine from its parts.
    pub const fn new(provider: WeatherProvider, weather_timeout: Duration, calendar: Calendar) -> Self {
        Self {
            provider,
            weather_timeout,
            calendar,
        }
    }

    /// Build the engine described by `config`.
    pub fn from_config(config: &AgrisenseConfig) -> Result<Self, EngineError> {
        let provider = WeatherProvider::from_config(&config.weather.provider_config())?;
        info!(
            provider = provider.name(),
            timeout_ms = config.weather.timeout_ms,
            fixed_month = config.calendar.fixed_month,
            "soil profile engine ready"
        );
        Ok(Self::new(
            provider,
            config.weather.timeout(),
            config.calendar.calendar(),
        ))
    }

    /// Weather provider in use.
    pub const fn provider(&self) -> &WeatherProvider {
        &self.provider
    }

    /// Synthesize the soil profile at `(latitude, longitude)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Soil`] if the coordinate is not finite or out
    /// of range. Weather failures are not errors.
    pub async fn synthesize_soil_profile(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<SoilProfile, EngineError> {
        self.synthesize_report(latitude, longitude)
            .await
            .map(|report| report.profile)
    }

    /// Like [`synthesize_soil_profile`](Self::synthesize_soil_profile), also
    /// reporting whether live weather was used.
    pub async fn synthesize_report(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<SynthesisReport, EngineError> {
        let coordinate = validate_coordinate(latitude, longitude)?;
        let month = self.calendar.current_month();

        let conditions = self.fetch_conditions(&coordinate).await;
        let synthesis = synthesize(coordinate, conditions.as_ref(), month)?;

        debug!(
            latitude,
            longitude,
            month,
            weather_source = synthesis.weather_source.as_str(),
            soil_type = synthesis.profile.soil_type.as_str(),
            salinity_class = synthesis.profile.salinity_class.as_str(),
            "soil profile synthesized"
        );

        Ok(SynthesisReport {
            profile: synthesis.profile,
            weather_source: synthesis.weather_source,
        })
    }

    /// Fetch live conditions, or `None` when the estimate should be used.
    async fn fetch_conditions(&self, coordinate: &Coordinate) -> Option<CurrentConditions> {
        if !self.provider.is_enabled() {
            return None;
        }

        match timeout(
            self.weather_timeout,
            self.provider.current_conditions(coordinate),
        )
        .await
        {
            Ok(Ok(conditions)) => Some(conditions),
            Ok(Err(e)) => {
                warn!(
                    latitude = coordinate.latitude,
                    longitude = coordinate.longitude,
                    provider = self.provider.name(),
                    error = %e,
                    "weather fetch failed, using estimate"
                );
                None
            }
            Err(_) => {
                warn!(
                    latitude = coordinate.latitude,
                    longitude = coordinate.longitude,
                    provider = self.provider.name(),
                    timeout_ms = self.weather_timeout.as_millis(),
                    "weather fetch deadline exceeded, using estimate"
                );
                None
            }
        }
    }
}
