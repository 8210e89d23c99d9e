//! Latitude-banded climate zone classification.

use agrisense_types::ClimateZone;

/// Upper bounds (exclusive) on `abs(latitude)` for each zone, equator first.
/// Anything past the last bound is [`ClimateZone::Polar`].
const ZONE_BANDS: [(f64, ClimateZone); 4] = [
    (15.0, ClimateZone::Tropical),
    (35.0, ClimateZone::Subtropical),
    (50.0, ClimateZone::Temperate),
    (66.5, ClimateZone::Cold),
];

/// Classify `latitude` into a climate zone.
///
/// Comparisons are strict, so a latitude exactly on a boundary falls into the
/// higher-latitude zone.
pub fn classify_climate_zone(latitude: f64) -> ClimateZone {
    let abs_lat = latitude.abs();
    ZONE_BANDS
        .iter()
        .find(|(limit, _)| abs_lat < *limit)
        .map_or(ClimateZone::Polar, |&(_, zone)| zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_is_tropical() {
        assert_eq!(classify_climate_zone(0.0), ClimateZone::Tropical);
    }

    #[test]
    fn boundaries_resolve_to_higher_latitude_zone() {
        assert_eq!(classify_climate_zone(15.0), ClimateZone::Subtropical);
        assert_eq!(classify_climate_zone(-35.0), ClimateZone::Temperate);
        assert_eq!(classify_climate_zone(50.0), ClimateZone::Cold);
        assert_eq!(classify_climate_zone(66.5), ClimateZone::Polar);
        assert_eq!(classify_climate_zone(-23.5), ClimateZone::Subtropical);
    }

    #[test]
    fn hemispheres_are_symmetric() {
        for lat in [3.0, 20.0, 41.2, 60.0, 80.0] {
            assert_eq!(classify_climate_zone(lat), classify_climate_zone(-lat));
        }
    }

    #[test]
    fn zone_is_monotonic_in_abs_latitude() {
        let mut previous = ClimateZone::Tropical;
        for step in 0_u32..=900 {
            let lat = f64::from(step) / 10.0;
            let zone = classify_climate_zone(lat);
            assert!(zone >= previous, "zone went backwards at {lat}");
            previous = zone;
        }
        assert_eq!(previous, ClimateZone::Polar);
    }

    #[test]
    fn just_below_boundary_stays_in_lower_zone() {
        assert_eq!(classify_climate_zone(14.9999), ClimateZone::Tropical);
        assert_eq!(classify_climate_zone(66.4999), ClimateZone::Cold);
    }
}
