//! Packaging of derived fields into the published [`SoilProfile`].

use agrisense_types::{Coordinate, SalinityClass, SoilProfile, SoilType};

use crate::fixed::round_to;
use crate::hash::KEY_DECIMALS;

/// Decimal places for most numeric fields.
const FIELD_DECIMALS: u8 = 1;

/// Decimal places for conductivity and organic carbon.
const FINE_DECIMALS: u8 = 2;

/// Unrounded field values produced by the synthesizers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawProfile {
    /// Air temperature, degrees C.
    pub temperature: f64,
    /// Relative humidity, %.
    pub humidity: f64,
    /// Soil moisture, %.
    pub moisture: f64,
    /// Soil type.
    pub soil_type: SoilType,
    /// Nitrogen, ppm.
    pub nitrogen: f64,
    /// Phosphorous, ppm.
    pub phosphorous: f64,
    /// Potassium, ppm.
    pub potassium: f64,
    /// Soil pH.
    pub ph: f64,
    /// Electrical conductivity, dS/m.
    pub electrical_conductivity: f64,
    /// Organic carbon, %.
    pub organic_carbon: f64,
    /// Pathogen flag.
    pub pathogen_presence: bool,
    /// Salinity band of the unrounded conductivity.
    pub salinity_class: SalinityClass,
}

/// Round every field and package the profile.
///
/// The salinity class is passed through as classified, so a raw EC just
/// under a band edge keeps its lower band even when it rounds up to the edge.
pub fn assemble_profile(raw: &RawProfile, coordinate: &Coordinate) -> SoilProfile {
    SoilProfile {
        temperature: round_to(raw.temperature, FIELD_DECIMALS),
        humidity: round_to(raw.humidity, FIELD_DECIMALS),
        moisture: round_to(raw.moisture, FIELD_DECIMALS),
        soil_type: raw.soil_type,
        nitrogen: round_to(raw.nitrogen, FIELD_DECIMALS),
        phosphorous: round_to(raw.phosphorous, FIELD_DECIMALS),
        potassium: round_to(raw.potassium, FIELD_DECIMALS),
        ph: round_to(raw.ph, FIELD_DECIMALS),
        electrical_conductivity: round_to(raw.electrical_conductivity, FINE_DECIMALS),
        organic_carbon: round_to(raw.organic_carbon, FINE_DECIMALS),
        pathogen_presence: raw.pathogen_presence,
        salinity_class: raw.salinity_class,
        latitude: round_to(coordinate.latitude, KEY_DECIMALS),
        longitude: round_to(coordinate.longitude, KEY_DECIMALS),
    }
}
