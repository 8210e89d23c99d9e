//! Formula-based weather estimate and live-reading resolution.
//!
//! Used when the weather provider is disabled, fails, times out or returns a
//! reading without temperature or humidity.
//!
//! ```text
//! temperature = clamp(30 - 0.4|lat| + season(lat, month) + 3 sin(0.1|lat|), 5, 40)
//! humidity    = clamp(70 - 0.3|lat| + 15 sin(0.2|lat|), 25, 90)
//! ```
//!
//! `season` is `+5` during the local summer (April to September north of
//! the equator, October to March otherwise) and `-5` the rest of the year.

// Evaluation order follows the reference formulas term by term; fused
// multiply-add would shift the low bits of the result.
#![allow(clippy::suboptimal_flops)]

use agrisense_types::{Coordinate, CurrentConditions, WeatherSample, WeatherSource};

/// Seasonal swing applied to the estimated temperature, degrees C.
const SEASONAL_SWING: f64 = 5.0;

/// Whether `month` (1-12) falls in the local summer at `latitude`.
///
/// Only strictly positive latitudes use the northern calendar.
pub fn is_local_summer(latitude: f64, month: u32) -> bool {
    let northern_summer = (4..=9).contains(&month);
    if latitude > 0.0 {
        northern_summer
    } else {
        !northern_summer
    }
}

/// Estimated air temperature for `latitude` in `month`, degrees C.
pub fn estimate_temperature(latitude: f64, month: u32) -> f64 {
    let abs_lat = latitude.abs();
    let seasonal = if is_local_summer(latitude, month) {
        SEASONAL_SWING
    } else {
        -SEASONAL_SWING
    };
    let temperature = 30.0 - abs_lat * 0.4 + seasonal + (abs_lat * 0.1).sin() * 3.0;
    temperature.clamp(5.0, 40.0)
}

/// Estimated relative humidity for `latitude`, %.
pub fn estimate_humidity(latitude: f64) -> f64 {
    let abs_lat = latitude.abs();
    let humidity = 70.0 - abs_lat * 0.3 + (abs_lat * 0.2).sin() * 15.0;
    humidity.clamp(25.0, 90.0)
}

/// Fully estimated weather for `coordinate`, with no soil measurements.
pub fn estimate_weather(coordinate: &Coordinate, month: u32) -> WeatherSample {
    WeatherSample {
        temperature_c: estimate_temperature(coordinate.latitude, month),
        humidity_pct: estimate_humidity(coordinate.latitude),
        soil_temp_c: None,
        soil_moisture_frac: None,
    }
}

/// Combine an optional live reading with the estimate.
///
/// Missing or non-finite temperature and humidity are filled from the
/// formula field by field. The result is [`WeatherSource::Live`] when at
/// least one of the two came from the reading.
pub fn resolve_weather(
    coordinate: &Coordinate,
    conditions: Option<&CurrentConditions>,
    month: u32,
) -> (WeatherSample, WeatherSource) {
    let estimate = estimate_weather(coordinate, month);
    let Some(conditions) = conditions else {
        return (estimate, WeatherSource::Estimated);
    };

    let live_temperature = finite(conditions.temperature_c);
    let live_humidity = finite(conditions.humidity_pct);
    let source = if live_temperature.is_some() || live_humidity.is_some() {
        WeatherSource::Live
    } else {
        WeatherSource::Estimated
    };

    let sample = WeatherSample {
        temperature_c: live_temperature.unwrap_or(estimate.temperature_c),
        humidity_pct: live_humidity.unwrap_or(estimate.humidity_pct),
        soil_temp_c: finite(conditions.soil_temp_c),
        soil_moisture_frac: finite(conditions.soil_moisture_frac),
    };
    (sample, source)
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
