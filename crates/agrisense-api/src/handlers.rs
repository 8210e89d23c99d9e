//! REST endpoint handlers for the soil profile API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Health check |
//! | `GET` | `/api/soil-profile?lat=..&lng=..` | Synthesized soil profile |
//! | `POST` | `/api/soil-health` | Profile forwarded to the soil-health service |

use std::sync::Arc;

use agrisense_core::{EngineError, validate_coordinate};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request structs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/soil-profile`.
///
/// Kept as strings so a bad value yields the API's own error envelope.
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    /// Latitude in decimal degrees.
    pub lat: Option<String>,
    /// Longitude in decimal degrees.
    pub lng: Option<String>,
}

/// Body of `POST /api/soil-health`.
#[derive(Debug, Deserialize)]
pub struct SoilHealthRequest {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

fn parse_degrees(name: &str, raw: Option<&str>) -> Result<f64, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::InvalidRequest(format!("missing `{name}`")))?;
    raw.trim()
        .parse()
        .map_err(|e| ApiError::InvalidRequest(format!("`{name}` is not a number: {e}")))
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Health check.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "success",
        "message": "AgriSense soil profile API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/soil-profile
// ---------------------------------------------------------------------------

/// Synthesize the soil profile at `lat`, `lng`.
pub async fn soil_profile(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProfileQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let latitude = parse_degrees("lat", params.lat.as_deref())?;
    let longitude = parse_degrees("lng", params.lng.as_deref())?;

    let report = state.engine.synthesize_report(latitude, longitude).await?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": report.profile,
        "weather_source": report.weather_source,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/soil-health
// ---------------------------------------------------------------------------

/// Synthesize a profile and have the soil-health service analyze it.
///
/// Responds 400 for a bad coordinate, 503 when no service is configured
/// and 502 when the service call fails. The 503 is decided before any
/// weather fetch.
pub async fn soil_health(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SoilHealthRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    validate_coordinate(request.latitude, request.longitude).map_err(EngineError::from)?;

    let client = state
        .soil_health
        .as_ref()
        .ok_or(ApiError::DownstreamUnavailable)?;

    let report = state
        .engine
        .synthesize_report(request.latitude, request.longitude)
        .await?;

    let analysis = client.analyze(&report.profile).await.map_err(|e| {
        warn!(
            latitude = request.latitude,
            longitude = request.longitude,
            error = %e,
            "soil-health analysis failed"
        );
        ApiError::from(e)
    })?;

    info!(
        latitude = request.latitude,
        longitude = request.longitude,
        weather_source = report.weather_source.as_str(),
        "soil-health analysis complete"
    );

    Ok(Json(serde_json::json!({
        "status": "success",
        "data": {
            "soil_profile": report.profile,
            "analysis": analysis,
        },
        "weather_source": report.weather_source,
    })))
}
