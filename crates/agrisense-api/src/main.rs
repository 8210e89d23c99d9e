//! AgriSense soil profile API server.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (`AGRISENSE_CONFIG` YAML plus environment overrides)
//! 2. Initialize structured logging (tracing)
//! 3. Build the soil profile engine and the weather provider
//! 4. Build the soil-health client, if a service URL is configured
//! 5. Serve HTTP until `Ctrl-C`

use std::sync::Arc;

use agrisense_api::{AppState, ServerConfig, start_server};
use agrisense_core::{AgrisenseConfig, SoilHealthClient, SoilProfileEngine};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, engine setup, or the server fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration.
    let config = AgrisenseConfig::load().context("loading configuration")?;

    // 2. Initialize structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        weather_enabled = config.weather.enabled,
        weather_api_url = config.weather.api_url,
        weather_timeout_ms = config.weather.timeout_ms,
        fixed_month = config.calendar.fixed_month,
        "agrisense-api starting"
    );

    // 3. Build the engine.
    let engine = SoilProfileEngine::from_config(&config).context("building soil profile engine")?;

    // 4. Build the soil-health client.
    let soil_health = match &config.downstream.soil_health_url {
        Some(url) => {
            let client = SoilHealthClient::new(url.clone(), config.downstream.timeout())
                .context("building soil-health client")?;
            info!(
                soil_health_url = client.endpoint(),
                timeout_ms = config.downstream.timeout_ms,
                "soil-health forwarding enabled"
            );
            Some(client)
        }
        None => {
            warn!("SOIL_HEALTH_URL not set, POST /api/soil-health will answer 503");
            None
        }
    };

    // 5. Serve.
    let state = Arc::new(AppState::new(engine, soil_health));
    let server_config = ServerConfig::from(&config.server);
    start_server(&server_config, state)
        .await
        .context("running HTTP server")?;

    Ok(())
}
