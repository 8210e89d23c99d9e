//! Axum router construction for the soil profile API.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- health check
/// - `GET /api/soil-profile` -- synthesized soil profile
/// - `POST /api/soil-health` -- profile plus soil-health analysis
///
/// CORS allows any origin so the map frontend can call the API directly.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/soil-profile", get(handlers::soil_profile))
        .route("/api/soil-health", post(handlers::soil_health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
