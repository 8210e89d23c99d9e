//! Error types for the soil profile API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body uses the `{"status": "error", "message": ...}` envelope.

use agrisense_core::{DownstreamError, EngineError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The coordinate is non-finite or outside the globe.
    #[error("{0}")]
    InvalidCoordinate(String),

    /// A query parameter or request body field is missing or unparsable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No soil-health service is configured.
    #[error("soil-health service is not configured")]
    DownstreamUnavailable,

    /// The soil-health service call failed.
    #[error(transparent)]
    Downstream(#[from] DownstreamError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Soil(e) => Self::InvalidCoordinate(e.to_string()),
            EngineError::Weather(e) => Self::Internal(e.to_string()),
        }
    }
}

impl ApiError {
    /// HTTP status this error maps to.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCoordinate(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::DownstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Downstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "status": "error",
            "message": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
