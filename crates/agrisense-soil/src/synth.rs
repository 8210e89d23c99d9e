//! Per-field synthesizers.
//!
//! Each synthesizer starts from a base value, applies additive climate and
//! soil adjustments, mixes in variation drawn from the run's
//! [`SeededSequence`], and clamps to the field's realistic range. The draw
//! order across synthesizers is part of the reproducibility contract:
//!
//! 1. nutrients (one draw shared by N, P and K)
//! 2. moisture
//! 3. pH
//! 4. electrical conductivity
//! 5. organic carbon
//! 6. pathogen gate (zero to three draws)

// Evaluation order follows the reference formulas term by term; fused
// multiply-add would shift the low bits of the result.
#![allow(clippy::suboptimal_flops)]

use agrisense_types::{ClimateZone, SoilType};

use crate::sequence::SeededSequence;

// ---------------------------------------------------------------------------
// Nutrients
// ---------------------------------------------------------------------------

/// Available nitrogen, phosphorous and potassium, ppm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutrients {
    /// Nitrogen, ppm, in `[100, 400]`.
    pub nitrogen: f64,
    /// Phosphorous, ppm, in `[15, 60]`.
    pub phosphorous: f64,
    /// Potassium, ppm, in `[100, 300]`.
    pub potassium: f64,
}

impl Nutrients {
    const BASE: Self = Self::new(200.0, 30.0, 180.0);

    const fn new(nitrogen: f64, phosphorous: f64, potassium: f64) -> Self {
        Self {
            nitrogen,
            phosphorous,
            potassium,
        }
    }

    fn offset(self, by: Self) -> Self {
        Self::new(
            self.nitrogen + by.nitrogen,
            self.phosphorous + by.phosphorous,
            self.potassium + by.potassium,
        )
    }
}

const fn zone_nutrient_offset(zone: ClimateZone) -> Nutrients {
    match zone {
        ClimateZone::Tropical => Nutrients::new(50.0, 10.0, 0.0),
        ClimateZone::Temperate => Nutrients::new(30.0, 5.0, 0.0),
        ClimateZone::Cold => Nutrients::new(-30.0, -5.0, 0.0),
        ClimateZone::Subtropical | ClimateZone::Polar => Nutrients::new(0.0, 0.0, 0.0),
    }
}

const fn soil_nutrient_offset(soil: SoilType) -> Nutrients {
    match soil {
        SoilType::Black => Nutrients::new(40.0, 8.0, 30.0),
        SoilType::Red => Nutrients::new(-20.0, -5.0, 15.0),
        SoilType::Sandy => Nutrients::new(-40.0, -10.0, -30.0),
        SoilType::Clayey => Nutrients::new(0.0, 0.0, 20.0),
        SoilType::Loamy => Nutrients::new(0.0, 0.0, 0.0),
    }
}

/// Synthesize N/P/K for a zone and soil type.
///
/// A single multiplicative variation `v = draw * 0.3 + 0.85` (85% to 115%)
/// scales all three nutrients before clamping.
pub fn synthesize_nutrients(
    zone: ClimateZone,
    soil: SoilType,
    sequence: &mut SeededSequence,
) -> Nutrients {
    let base = Nutrients::BASE
        .offset(zone_nutrient_offset(zone))
        .offset(soil_nutrient_offset(soil));
    let variation = sequence.draw() * 0.3 + 0.85;

    Nutrients {
        nitrogen: (base.nitrogen * variation).clamp(100.0, 400.0),
        phosphorous: (base.phosphorous * variation).clamp(15.0, 60.0),
        potassium: (base.potassium * variation).clamp(100.0, 300.0),
    }
}

// ---------------------------------------------------------------------------
// Moisture
// ---------------------------------------------------------------------------

const fn moisture_retention(soil: SoilType) -> f64 {
    match soil {
        SoilType::Clayey => 10.0,
        SoilType::Sandy => -15.0,
        SoilType::Black => 5.0,
        SoilType::Loamy => 2.0,
        SoilType::Red => 0.0,
    }
}

/// Estimate soil moisture (%) from humidity and soil water retention,
/// blended with a measured surface fraction when one is available.
///
/// Only a strictly positive fraction counts as a measurement.
pub fn estimate_moisture(
    humidity: f64,
    soil: SoilType,
    measured_fraction: Option<f64>,
    sequence: &mut SeededSequence,
) -> f64 {
    let mut moisture = humidity * 0.6 + moisture_retention(soil);
    if let Some(fraction) = measured_fraction.filter(|f| *f > 0.0) {
        moisture = (moisture + fraction * 100.0) / 2.0;
    }
    moisture += (sequence.draw() - 0.5) * 10.0;
    moisture.clamp(20.0, 80.0)
}

// ---------------------------------------------------------------------------
// pH
// ---------------------------------------------------------------------------

/// Latitude below which soils are treated as leached tropical soils.
const ACIDIC_BELT: f64 = 23.5;

/// Latitude above which soils are treated as cold-region soils.
const ALKALINE_BELT: f64 = 50.0;

const fn ph_shift(soil: SoilType) -> f64 {
    match soil {
        SoilType::Black => 0.5,
        SoilType::Red => -0.4,
        SoilType::Sandy => -0.3,
        SoilType::Clayey => 0.3,
        SoilType::Loamy => 0.0,
    }
}

/// Synthesize soil pH in `[5.0, 8.5]`.
pub fn synthesize_ph(latitude: f64, soil: SoilType, sequence: &mut SeededSequence) -> f64 {
    let abs_lat = latitude.abs();
    let mut ph = 6.5;
    if abs_lat < ACIDIC_BELT {
        ph -= 0.8;
    } else if abs_lat > ALKALINE_BELT {
        ph += 0.5;
    }
    ph += ph_shift(soil);
    ph += (sequence.draw() - 0.5) * 0.6;
    ph.clamp(5.0, 8.5)
}

// ---------------------------------------------------------------------------
// Electrical conductivity
// ---------------------------------------------------------------------------

/// Synthesize electrical conductivity (dS/m) in `[0.5, 4.0]`.
///
/// `|sin(0.05 lng)| * 0.4` stands in for coastal proximity.
pub fn synthesize_conductivity(
    zone: ClimateZone,
    longitude: f64,
    sequence: &mut SeededSequence,
) -> f64 {
    let mut ec = 1.0;
    match zone {
        ClimateZone::Subtropical => ec += 0.5,
        ClimateZone::Tropical => ec -= 0.3,
        ClimateZone::Temperate | ClimateZone::Cold | ClimateZone::Polar => {}
    }
    ec += (longitude * 0.05).sin().abs() * 0.4;
    ec += sequence.draw() * 0.8;
    ec.clamp(0.5, 4.0)
}

// ---------------------------------------------------------------------------
// Organic carbon
// ---------------------------------------------------------------------------

const fn zone_carbon_offset(zone: ClimateZone) -> f64 {
    match zone {
        ClimateZone::Tropical => 1.0,
        ClimateZone::Temperate => 0.5,
        ClimateZone::Cold => -0.5,
        ClimateZone::Subtropical | ClimateZone::Polar => 0.0,
    }
}

const fn soil_carbon_offset(soil: SoilType) -> f64 {
    match soil {
        SoilType::Black => 1.5,
        SoilType::Sandy => -0.8,
        SoilType::Clayey => 0.3,
        SoilType::Red | SoilType::Loamy => 0.0,
    }
}

/// Synthesize organic carbon (%) in `[0.5, 5.0]`.
pub fn synthesize_organic_carbon(
    zone: ClimateZone,
    soil: SoilType,
    sequence: &mut SeededSequence,
) -> f64 {
    let mut carbon = 2.0 + zone_carbon_offset(zone);
    carbon += soil_carbon_offset(soil);
    carbon += (sequence.draw() - 0.5) * 1.0;
    carbon.clamp(0.5, 5.0)
}

// ---------------------------------------------------------------------------
// Pathogen risk
// ---------------------------------------------------------------------------

/// Gate soil-borne pathogen risk on warm, wet conditions.
///
/// Branches are tried in order and each consumes its draw only when its
/// deterministic conditions hold:
///
/// 1. moisture > 65, temperature > 25, draw > 0.6
/// 2. moisture > 70, draw > 0.7
/// 3. temperature > 30, moisture > 60, draw > 0.65
pub fn classify_pathogen_risk(
    moisture: f64,
    temperature: f64,
    sequence: &mut SeededSequence,
) -> bool {
    (moisture > 65.0 && temperature > 25.0 && sequence.draw() > 0.6)
        || (moisture > 70.0 && sequence.draw() > 0.7)
        || (temperature > 30.0 && moisture > 60.0 && sequence.draw() > 0.65)
}
