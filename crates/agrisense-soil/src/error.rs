//! Error types for the `agrisense-soil` crate.
//!
//! Every field synthesizer ends in a clamp, so once a coordinate is accepted
//! nothing downstream can fail. The only error is a rejected input domain.

/// Errors that can occur when synthesizing a soil profile.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SoilError {
    /// The coordinate is non-finite or outside the geographic range.
    #[error(
        "invalid coordinate ({latitude}, {longitude}): latitude must be in [-90, 90] and longitude in [-180, 180]"
    )]
    InvalidCoordinate {
        /// The rejected latitude.
        latitude: f64,
        /// The rejected longitude.
        longitude: f64,
    },
}
