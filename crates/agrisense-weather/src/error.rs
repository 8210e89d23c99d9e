//! Error types for the weather provider.
//!
//! Every variant is recoverable from the engine's point of view: a failed
//! live fetch falls back to the formula estimate rather than failing the
//! synthesis.

/// Errors that can occur while fetching current conditions.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The HTTP request could not be built, sent, or completed in time.
    #[error("weather request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("weather provider returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, best effort.
        body: String,
    },

    /// The response body was not a usable conditions payload.
    #[error("malformed weather payload: {0}")]
    Malformed(String),

    /// The provider is switched off.
    #[error("weather provider disabled")]
    Disabled,
}
