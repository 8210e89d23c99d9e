//! Enumeration types for the soil synthesis engine.
//!
//! The serialized spellings of [`SoilType`] and [`SalinityClass`] are part of
//! the contract with the soil-health inference service and must not change.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Climate zone
// ---------------------------------------------------------------------------

/// Latitude-banded climate classification driving the baseline heuristics.
///
/// | Zone        | `abs(latitude)` |
/// |-------------|-----------------|
/// | Tropical    | `< 15`          |
/// | Subtropical | `< 35`          |
/// | Temperate   | `< 50`          |
/// | Cold        | `< 66.5`        |
/// | Polar       | otherwise       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ClimateZone {
    /// Equatorial band.
    Tropical,
    /// Warm, frequently arid band.
    Subtropical,
    /// Mid-latitude band.
    Temperate,
    /// Boreal band below the polar circle.
    Cold,
    /// At or beyond the polar circle.
    Polar,
}

impl ClimateZone {
    /// All zones ordered from the equator outward.
    pub const ALL: [Self; 5] = [
        Self::Tropical,
        Self::Subtropical,
        Self::Temperate,
        Self::Cold,
        Self::Polar,
    ];

    /// Lowercase name used in logs and serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tropical => "tropical",
            Self::Subtropical => "subtropical",
            Self::Temperate => "temperate",
            Self::Cold => "cold",
            Self::Polar => "polar",
        }
    }
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Soil type
// ---------------------------------------------------------------------------

/// Categorical soil type reported in the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SoilType {
    /// Iron-rich, well drained, typically acidic.
    Red,
    /// Clay-rich, high water and nutrient retention.
    Black,
    /// Fine-textured with heavy water retention.
    Clayey,
    /// Coarse-textured, drains quickly, nutrient poor.
    Sandy,
    /// Balanced mix of sand, silt and clay.
    Loamy,
}

impl SoilType {
    /// Every soil type.
    pub const ALL: [Self; 5] = [Self::Red, Self::Black, Self::Clayey, Self::Sandy, Self::Loamy];

    /// Integer encoding used by the soil-health regression model.
    pub const fn model_code(self) -> u8 {
        match self {
            Self::Sandy => 0,
            Self::Loamy => 1,
            Self::Black => 2,
            Self::Red => 3,
            Self::Clayey => 4,
        }
    }

    /// Wire spelling of the soil type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Black => "Black",
            Self::Clayey => "Clayey",
            Self::Sandy => "Sandy",
            Self::Loamy => "Loamy",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Salinity class
// ---------------------------------------------------------------------------

/// Salinity band derived from electrical conductivity (dS/m).
///
/// Bands are half-open: `[0, 2)`, `[2, 4)`, `[4, 8)`, `[8, inf)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SalinityClass {
    /// EC below 2.0 dS/m.
    Normal,
    /// EC in `[2.0, 4.0)`.
    #[serde(rename = "Slightly Saline")]
    SlightlySaline,
    /// EC in `[4.0, 8.0)`.
    #[serde(rename = "Moderately Saline")]
    ModeratelySaline,
    /// EC of 8.0 dS/m or more.
    #[serde(rename = "Highly Saline")]
    HighlySaline,
}

impl SalinityClass {
    /// Integer encoding used by the soil-health regression model.
    pub const fn model_code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::SlightlySaline => 1,
            Self::ModeratelySaline => 2,
            Self::HighlySaline => 3,
        }
    }

    /// Wire spelling of the class.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::SlightlySaline => "Slightly Saline",
            Self::ModeratelySaline => "Moderately Saline",
            Self::HighlySaline => "Highly Saline",
        }
    }
}

impl fmt::Display for SalinityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Weather source
// ---------------------------------------------------------------------------

/// Where the temperature and humidity of a profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum WeatherSource {
    /// A live reading from the weather provider (possibly partially
    /// completed by the estimator).
    Live,
    /// The latitude/season formula; no usable live reading.
    Estimated,
}

impl WeatherSource {
    /// Snake-case name used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Estimated => "estimated",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn salinity_serializes_with_spaces() {
        let json = serde_json::to_string(&SalinityClass::SlightlySaline).unwrap();
        assert_eq!(json, "\"Slightly Saline\"");
        let back: SalinityClass = serde_json::from_str("\"Highly Saline\"").unwrap();
        assert_eq!(back, SalinityClass::HighlySaline);
    }

    #[test]
    fn soil_type_serializes_capitalized() {
        let json = serde_json::to_string(&SoilType::Clayey).unwrap();
        assert_eq!(json, "\"Clayey\"");
    }

    #[test]
    fn climate_zone_serializes_lowercase() {
        let json = serde_json::to_string(&ClimateZone::Subtropical).unwrap();
        assert_eq!(json, "\"subtropical\"");
    }

    #[test]
    fn model_codes_match_consumer_encoding() {
        assert_eq!(SoilType::Sandy.model_code(), 0);
        assert_eq!(SoilType::Loamy.model_code(), 1);
        assert_eq!(SoilType::Black.model_code(), 2);
        assert_eq!(SoilType::Red.model_code(), 3);
        assert_eq!(SoilType::Clayey.model_code(), 4);
        assert_eq!(SalinityClass::Normal.model_code(), 0);
        assert_eq!(SalinityClass::HighlySaline.model_code(), 3);
    }

    #[test]
    fn display_matches_wire_spelling() {
        for soil in SoilType::ALL {
            let json = serde_json::to_string(&soil).unwrap();
            assert_eq!(json, format!("\"{soil}\""));
        }
        assert_eq!(SalinityClass::ModeratelySaline.to_string(), "Moderately Saline");
    }
}
