//! Soil type selection from climate zone and a trigonometric location factor.
//!
//! ```text
//! location_factor = (sin(0.1 lat) + cos(0.1 lng)) / 2      in [-1, 1]
//! ```
//!
//! Each zone owns an ordered ladder of `(threshold, soil)` rungs. The first
//! rung whose threshold the factor strictly exceeds wins; otherwise the
//! ladder's fallback applies.
//!
//! | Zone        | Rungs                                     | Fallback |
//! |-------------|-------------------------------------------|----------|
//! | Tropical    | `> 0.3` Red, `> -0.2` Clayey              | Loamy    |
//! | Subtropical | `> 0.4` Black, `> 0` Loamy, `> -0.3` Red  | Clayey   |
//! | Temperate   | `> 0.2` Loamy, `> -0.2` Sandy             | Clayey   |
//! | Cold, Polar | `> 0` Sandy                               | Loamy    |

use agrisense_types::{ClimateZone, Coordinate, SoilType};

/// An ordered decision table for one climate zone.
#[derive(Debug, Clone, Copy)]
pub struct SoilLadder {
    /// `(threshold, soil)` pairs, highest threshold first.
    pub rungs: &'static [(f64, SoilType)],
    /// Soil used when the factor clears no rung.
    pub fallback: SoilType,
}

impl SoilLadder {
    /// Walk the ladder for `factor`.
    pub fn select(&self, factor: f64) -> SoilType {
        self.rungs
            .iter()
            .find(|(threshold, _)| factor > *threshold)
            .map_or(self.fallback, |&(_, soil)| soil)
    }
}

const TROPICAL: SoilLadder = SoilLadder {
    rungs: &[(0.3, SoilType::Red), (-0.2, SoilType::Clayey)],
    fallback: SoilType::Loamy,
};

const SUBTROPICAL: SoilLadder = SoilLadder {
    rungs: &[
        (0.4, SoilType::Black),
        (0.0, SoilType::Loamy),
        (-0.3, SoilType::Red),
    ],
    fallback: SoilType::Clayey,
};

const TEMPERATE: SoilLadder = SoilLadder {
    rungs: &[(0.2, SoilType::Loamy), (-0.2, SoilType::Sandy)],
    fallback: SoilType::Clayey,
};

const BOREAL: SoilLadder = SoilLadder {
    rungs: &[(0.0, SoilType::Sandy)],
    fallback: SoilType::Loamy,
};

/// The decision table used for `zone`.
pub const fn ladder_for(zone: ClimateZone) -> &'static SoilLadder {
    match zone {
        ClimateZone::Tropical => &TROPICAL,
        ClimateZone::Subtropical => &SUBTROPICAL,
        ClimateZone::Temperate => &TEMPERATE,
        ClimateZone::Cold | ClimateZone::Polar => &BOREAL,
    }
}

/// Deterministic pseudo-spatial discriminator for `coordinate`.
pub fn location_factor(coordinate: &Coordinate) -> f64 {
    ((coordinate.latitude * 0.1).sin() + (coordinate.longitude * 0.1).cos()) / 2.0
}

/// Pick the soil type for `coordinate` in `zone`.
pub fn classify_soil_type(coordinate: &Coordinate, zone: ClimateZone) -> SoilType {
    ladder_for(zone).select(location_factor(coordinate))
}
