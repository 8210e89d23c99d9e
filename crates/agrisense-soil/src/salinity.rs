//! Salinity banding of electrical conductivity.

use agrisense_types::SalinityClass;

/// Exclusive upper EC bound (dS/m) of each class below [`SalinityClass::HighlySaline`].
const SALINITY_BANDS: [(f64, SalinityClass); 3] = [
    (2.0, SalinityClass::Normal),
    (4.0, SalinityClass::SlightlySaline),
    (8.0, SalinityClass::ModeratelySaline),
];

/// Classify an electrical conductivity value.
pub fn classify_salinity(ec: f64) -> SalinityClass {
    SALINITY_BANDS
        .iter()
        .find(|(limit, _)| ec < *limit)
        .map_or(SalinityClass::HighlySaline, |&(_, class)| class)
}
