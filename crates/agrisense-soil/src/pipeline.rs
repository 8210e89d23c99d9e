//! The synthesis pipeline, leaves first.
//!
//! ```text
//! validate -> climate zone -> weather (live or estimate) -> seed -> soil type
//!          -> nutrients -> moisture -> pH -> EC -> organic carbon -> pathogen
//!          -> salinity -> assemble
//! ```
//!
//! The pipeline is a pure function of `(coordinate, conditions, month)`.
//! Each call owns its own [`SeededSequence`]; nothing is shared between
//! calls, so concurrent runs need no coordination.

use agrisense_types::{
    ClimateZone, Coordinate, CurrentConditions, SoilProfile, WeatherSample, WeatherSource,
};
use tracing::debug;

use crate::climate::classify_climate_zone;
use crate::error::SoilError;
use crate::estimate::resolve_weather;
use crate::hash::hash_coordinate;
use crate::profile::{RawProfile, assemble_profile};
use crate::salinity::classify_salinity;
use crate::sequence::SeededSequence;
use crate::soil_type::classify_soil_type;
use crate::synth::{
    classify_pathogen_risk, estimate_moisture, synthesize_conductivity, synthesize_nutrients,
    synthesize_organic_carbon, synthesize_ph,
};

/// Result of one pipeline run: the published profile plus the intermediate
/// values worth logging or reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    /// The rounded, published profile.
    pub profile: SoilProfile,
    /// Climate zone of the coordinate.
    pub zone: ClimateZone,
    /// Weather inputs actually used.
    pub weather: WeatherSample,
    /// Whether `weather` came from a live reading.
    pub weather_source: WeatherSource,
    /// Seed the run's sequence started from.
    pub seed: u64,
}

/// Accept `(latitude, longitude)` if it is a finite, in-range coordinate.
pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<Coordinate, SoilError> {
    let coordinate = Coordinate::new(latitude, longitude);
    if coordinate.is_valid() {
        Ok(coordinate)
    } else {
        Err(SoilError::InvalidCoordinate {
            latitude,
            longitude,
        })
    }
}

/// Synthesize the soil profile for `coordinate`.
///
/// `conditions` is the live reading, if one was obtained; `month` (1-12)
/// drives the seasonal term of the fallback estimate.
pub fn synthesize(
    coordinate: Coordinate,
    conditions: Option<&CurrentConditions>,
    month: u32,
) -> Result<Synthesis, SoilError> {
    let coordinate = validate_coordinate(coordinate.latitude, coordinate.longitude)?;

    let zone = classify_climate_zone(coordinate.latitude);
    let (weather, weather_source) = resolve_weather(&coordinate, conditions, month);

    let seed = hash_coordinate(&coordinate);
    let mut sequence = SeededSequence::new(seed);

    let soil_type = classify_soil_type(&coordinate, zone);
    let nutrients = synthesize_nutrients(zone, soil_type, &mut sequence);
    let moisture = estimate_moisture(
        weather.humidity_pct,
        soil_type,
        weather.soil_moisture_frac,
        &mut sequence,
    );
    let ph = synthesize_ph(coordinate.latitude, soil_type, &mut sequence);
    let electrical_conductivity =
        synthesize_conductivity(zone, coordinate.longitude, &mut sequence);
    let organic_carbon = synthesize_organic_carbon(zone, soil_type, &mut sequence);
    let pathogen_presence =
        classify_pathogen_risk(moisture, weather.temperature_c, &mut sequence);
    let salinity_class = classify_salinity(electrical_conductivity);

    debug!(
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        zone = zone.as_str(),
        soil_type = soil_type.as_str(),
        seed,
        draws = sequence.draws(),
        weather_source = weather_source.as_str(),
        "soil fields derived"
    );

    let raw = RawProfile {
        temperature: weather.temperature_c,
        humidity: weather.humidity_pct,
        moisture,
        soil_type,
        nitrogen: nutrients.nitrogen,
        phosphorous: nutrients.phosphorous,
        potassium: nutrients.potassium,
        ph,
        electrical_conductivity,
        organic_carbon,
        pathogen_presence,
        salinity_class,
    };

    Ok(Synthesis {
        profile: assemble_profile(&raw, &coordinate),
        zone,
        weather,
        weather_source,
        seed,
    })
}

/// Convenience wrapper returning only the profile.
pub fn synthesize_profile(
    latitude: f64,
    longitude: f64,
    conditions: Option<&CurrentConditions>,
    month: u32,
) -> Result<SoilProfile, SoilError> {
    synthesize(Coordinate::new(latitude, longitude), conditions, month).map(|s| s.profile)
}
