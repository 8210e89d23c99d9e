//! Shared type definitions for the AgriSense soil synthesis engine.
//!
//! This crate is the single source of truth for the values that flow between
//! the synthesis pipeline, the weather provider, the HTTP surface and the
//! downstream soil-health service. Types defined here flow to `TypeScript`
//! via `ts-rs` for the map frontend.
//!
//! # Modules
//!
//! - [`enums`] -- Categorical values (climate zone, soil type, salinity class,
//!   weather source)
//! - [`structs`] -- Coordinates, weather readings and the synthesized
//!   [`SoilProfile`]

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ClimateZone, SalinityClass, SoilType, WeatherSource};
pub use structs::{Coordinate, CurrentConditions, SoilProfile, WeatherSample};
