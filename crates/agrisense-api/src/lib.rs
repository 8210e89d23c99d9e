//! Soil profile HTTP API for the AgriSense engine.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Health check** (`GET /`)
//! - **Soil profile** (`GET /api/soil-profile?lat=..&lng=..`) returning the
//!   synthesized profile and whether live weather was used
//! - **Soil health** (`POST /api/soil-health`) forwarding the profile to
//!   the soil-health inference service and returning both
//!
//! Responses use a `{"status": "success" | "error", ...}` envelope.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
