//! Engine orchestration for AgriSense soil profile synthesis.
//!
//! Wraps the pure pipeline in `agrisense-soil` with the live weather
//! provider, a month source, YAML configuration, and the client for the
//! soil-health inference service that consumes the profiles.
//!
//! # Modules
//!
//! - [`engine`] -- [`SoilProfileEngine`], the async entry point.
//! - [`downstream`] -- [`SoilHealthClient`] for the inference service.
//! - [`config`] -- [`AgrisenseConfig`] loaded from YAML and the environment.
//! - [`calendar`] -- [`Calendar`] month source.
//! - [`error`] -- [`EngineError`].

pub mod calendar;
pub mod config;
pub mod downstream;
pub mod engine;
pub mod error;

pub use calendar::Calendar;
pub use config::{AgrisenseConfig, ConfigError};
pub use downstream::{DownstreamError, SoilHealthClient};
pub use engine::{SoilProfileEngine, SynthesisReport};
pub use error::EngineError;

/// Coordinate check run before any synthesis work.
pub use agrisense_soil::validate_coordinate;
