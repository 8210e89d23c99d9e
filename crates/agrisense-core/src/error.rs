//! Error types for the engine.

use agrisense_soil::SoilError;
use agrisense_weather::WeatherError;

/// Errors that can occur when building or running the engine.
///
/// Weather failures during a synthesis never surface here; they are
/// absorbed by falling back to the estimate. [`EngineError::Weather`]
/// only reports a provider that could not be constructed.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The input coordinate was rejected.
    #[error(transparent)]
    Soil(#[from] SoilError),

    /// The weather provider could not be built.
    #[error("weather provider setup failed: {0}")]
    Weather(#[from] WeatherError),
}
