//! Value structs shared across the workspace.
//!
//! [`SoilProfile`] is the flat object handed to the soil-health inference
//! service. Its serialized field names and units are fixed by that service:
//!
//! | Field               | Wire name           | Unit / range          |
//! |---------------------|---------------------|-----------------------|
//! | temperature         | `temperature`       | degrees C             |
//! | humidity            | `humidity`          | %                     |
//! | moisture            | `moisture`          | %, `[20, 80]`         |
//! | soil type           | `soil_type`         | category              |
//! | nitrogen            | `nitrogen`          | ppm, `[100, 400]`     |
//! | phosphorous         | `phosphorous`       | ppm, `[15, 60]`       |
//! | potassium           | `potassium`         | ppm, `[100, 300]`     |
//! | pH                  | `ph`                | `[5.0, 8.5]`          |
//! | conductivity        | `ec`                | dS/m, `[0.5, 4.0]`    |
//! | organic carbon      | `organic_carbon`    | %, `[0.5, 5.0]`       |
//! | pathogen flag       | `pathogen_presence` | `0` or `1`            |
//! | salinity class      | `salinity_class`    | category              |
//! | latitude, longitude | same                | degrees, 4 decimals   |

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{SalinityClass, SoilType};

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A geographic point in decimal degrees.
///
/// Construction does not validate; the synthesis pipeline rejects points
/// outside `[-90, 90] x [-180, 180]` before using them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and inside the geographic range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Current surface conditions as reported by the weather provider.
///
/// Field names on the wire follow the Open-Meteo `current` block. Every
/// field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CurrentConditions {
    /// Air temperature two metres above ground, degrees C.
    #[serde(rename = "temperature_2m", default)]
    pub temperature_c: Option<f64>,
    /// Relative humidity two metres above ground, %.
    #[serde(rename = "relative_humidity_2m", default)]
    pub humidity_pct: Option<f64>,
    /// Soil surface temperature, degrees C.
    #[serde(rename = "soil_temperature_0cm", default)]
    pub soil_temp_c: Option<f64>,
    /// Volumetric soil moisture in the top centimetre, m3/m3.
    #[serde(rename = "soil_moisture_0_to_1cm", default)]
    pub soil_moisture_frac: Option<f64>,
}

/// The resolved weather inputs of one synthesis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WeatherSample {
    /// Air temperature, degrees C.
    pub temperature_c: f64,
    /// Relative humidity, %.
    pub humidity_pct: f64,
    /// Soil surface temperature, degrees C, when measured.
    pub soil_temp_c: Option<f64>,
    /// Volumetric soil moisture fraction, when measured.
    pub soil_moisture_frac: Option<f64>,
}

// ---------------------------------------------------------------------------
// Soil profile
// ---------------------------------------------------------------------------

/// A complete synthesized soil/agronomic profile for one coordinate.
///
/// Created fresh per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SoilProfile {
    /// Air temperature, degrees C, one decimal.
    pub temperature: f64,
    /// Relative humidity, %, one decimal.
    pub humidity: f64,
    /// Soil moisture, %, one decimal.
    pub moisture: f64,
    /// Categorical soil type.
    pub soil_type: SoilType,
    /// Available nitrogen, ppm, one decimal.
    pub nitrogen: f64,
    /// Available phosphorous, ppm, one decimal.
    pub phosphorous: f64,
    /// Available potassium, ppm, one decimal.
    pub potassium: f64,
    /// Soil pH, one decimal.
    pub ph: f64,
    /// Electrical conductivity, dS/m, two decimals.
    #[serde(rename = "ec")]
    pub electrical_conductivity: f64,
    /// Organic carbon, %, two decimals.
    pub organic_carbon: f64,
    /// Whether soil-borne pathogen pressure is flagged.
    #[serde(with = "pathogen_flag")]
    #[ts(type = "number")]
    pub pathogen_presence: bool,
    /// Salinity band of [`Self::electrical_conductivity`].
    pub salinity_class: SalinityClass,
    /// Input latitude rounded to four decimals.
    pub latitude: f64,
    /// Input longitude rounded to four decimals.
    pub longitude: f64,
}

/// The consumer reads the pathogen flag as an integer.
mod pathogen_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*flag))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Int(u8),
            Bool(bool),
        }

        Ok(match Flag::deserialize(deserializer)? {
            Flag::Int(value) => value != 0,
            Flag::Bool(value) => value,
        })
    }
}
