//! Live weather input for the AgriSense soil engine.
//!
//! The engine asks a [`WeatherProvider`] for the current conditions at a
//! coordinate. Any failure here is recoverable: the caller falls back to
//! the latitude-based estimate.
//!
//! # Modules
//!
//! - [`openmeteo`] -- HTTP client and payload parsing for the Open-Meteo API.
//! - [`provider`] -- [`WeatherProvider`] enum dispatch.
//! - [`config`] -- [`WeatherConfig`].
//! - [`error`] -- [`WeatherError`].

pub mod config;
pub mod error;
pub mod openmeteo;
pub mod provider;

pub use config::WeatherConfig;
pub use error::WeatherError;
pub use openmeteo::{OpenMeteoClient, parse_current};
pub use provider::WeatherProvider;
