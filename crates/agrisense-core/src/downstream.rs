//! Client for the soil-health inference service.
//!
//! The service accepts the flat [`SoilProfile`] object at
//! `POST {base_url}/api/predict/soil-health` and answers with
//! `{"status": "success", "data": ...}`. Only `data` is returned to the
//! caller; its shape belongs to the service.

use std::time::Duration;

use agrisense_types::SoilProfile;
use tracing::debug;

/// Path of the prediction endpoint, relative to the base URL.
pub const SOIL_HEALTH_PATH: &str = "/api/predict/soil-health";

/// Errors from the soil-health service.
#[derive(Debug, thiserror::Error)]
pub enum DownstreamError {
    /// The request could not be built, sent, or completed in time.
    #[error("soil-health request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("soil-health service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, best effort.
        body: String,
    },

    /// The service answered 2xx but reported a failure in the envelope.
    #[error("soil-health service rejected the profile: {0}")]
    Rejected(String),

    /// The response was not the expected envelope.
    #[error("malformed soil-health response: {0}")]
    Malformed(String),
}

/// HTTP client for the soil-health inference service.
#[derive(Debug, Clone)]
pub struct SoilHealthClient {
    client: reqwest::Client,
    base_url: String,
}

impl SoilHealthClient {
    /// Create a client for the service at `base_url` with a request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DownstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DownstreamError::Request(format!("client build failed: {e}")))?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Full URL of the prediction endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{SOIL_HEALTH_PATH}", self.base_url)
    }

    /// Submit `profile` for analysis and return the envelope's `data`.
    pub async fn analyze(&self, profile: &SoilProfile) -> Result<serde_json::Value, DownstreamError> {
        let url = self.endpoint();

        let response = self
            .client
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|e| DownstreamError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(DownstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DownstreamError::Malformed(format!("response is not JSON: {e}")))?;

        debug!(
            latitude = profile.latitude,
            longitude = profile.longitude,
            "soil-health analysis received"
        );
        unwrap_envelope(json)
    }
}

/// Extract `data` from a `{"status": "success", "data": ...}` envelope.
pub fn unwrap_envelope(mut json: serde_json::Value) -> Result<serde_json::Value, DownstreamError> {
    let status = json
        .get("status")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| DownstreamError::Malformed("response missing status".to_owned()))?;

    if status != "success" {
        let message = json
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(status)
            .to_owned();
        return Err(DownstreamError::Rejected(message));
    }

    json.get_mut("data")
        .map(serde_json::Value::take)
        .ok_or_else(|| DownstreamError::Malformed("response missing data".to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let data = unwrap_envelope(json!({
            "status": "success",
            "data": {"soil_health_score": 72.5, "crop_recommendations": ["rice"]}
        }))
        .unwrap();
        assert_eq!(data["soil_health_score"], 72.5);
    }

    #[test]
    fn error_envelope_is_rejected_with_message() {
        let err = unwrap_envelope(json!({"status": "error", "message": "model not loaded"}))
            .unwrap_err();
        match err {
            DownstreamError::Rejected(message) => assert_eq!(message, "model not loaded"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn envelope_without_status_is_malformed() {
        let err = unwrap_envelope(json!({"data": {}})).unwrap_err();
        assert!(matches!(err, DownstreamError::Malformed(_)));
    }

    #[test]
    fn success_without_data_is_malformed() {
        let err = unwrap_envelope(json!({"status": "success"})).unwrap_err();
        assert!(matches!(err, DownstreamError::Malformed(_)));
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client = SoilHealthClient::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:5000/api/predict/soil-health");
    }
}
