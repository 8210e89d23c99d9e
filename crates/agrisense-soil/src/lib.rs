//! Deterministic soil/agronomic profile synthesis for the AgriSense engine.
//!
//! Given a coordinate (and optionally a live weather reading) this crate
//! derives a complete, internally consistent [`SoilProfile`]: temperature,
//! humidity, moisture, soil type, N/P/K, pH, electrical conductivity, organic
//! carbon, a pathogen-risk flag and a salinity class. It performs no I/O.
//!
//! # Modules
//!
//! - [`hash`] -- Coordinate key and 32-bit rolling hash seed.
//! - [`sequence`] -- Seeded linear congruential sequence in `[0, 1)`.
//! - [`climate`] -- Latitude-banded climate zones.
//! - [`estimate`] -- Formula weather estimate and live-reading resolution.
//! - [`soil_type`] -- Per-zone soil type decision tables.
//! - [`synth`] -- Nutrient, moisture, pH, conductivity, organic carbon and
//!   pathogen synthesizers.
//! - [`salinity`] -- Conductivity banding.
//! - [`profile`] -- Rounding and packaging.
//! - [`pipeline`] -- Validation and the end-to-end run.
//! - [`fixed`] -- Fixed-decimal formatting shared by hashing and rounding.
//! - [`error`] -- [`SoilError`].
//!
//! # Determinism
//!
//! For a fixed coordinate, reading and month the output is identical on
//! every call and every platform: all variation comes from a sequence
//! seeded by the coordinate hash and owned by the call.
//!
//! [`SoilProfile`]: agrisense_types::SoilProfile

pub mod climate;
pub mod error;
pub mod estimate;
pub mod fixed;
pub mod hash;
pub mod pipeline;
pub mod profile;
pub mod salinity;
pub mod sequence;
pub mod soil_type;
pub mod synth;

// Re-export primary items at crate root.
pub use climate::classify_climate_zone;
pub use error::SoilError;
pub use estimate::{estimate_humidity, estimate_temperature, estimate_weather, resolve_weather};
pub use hash::hash_coordinate;
pub use pipeline::{Synthesis, synthesize, synthesize_profile, validate_coordinate};
pub use salinity::classify_salinity;
pub use sequence::SeededSequence;
pub use soil_type::classify_soil_type;
