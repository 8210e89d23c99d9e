//! Shared application state for the soil profile API.

use agrisense_core::{SoilHealthClient, SoilProfileEngine};

/// State shared by every handler, held behind an `Arc`.
///
/// Both members are immutable after construction, so handlers never lock.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The synthesis engine.
    pub engine: SoilProfileEngine,
    /// Soil-health service client, if one is configured.
    pub soil_health: Option<SoilHealthClient>,
}

impl AppState {
    /// Create state from an engine and an optional soil-health client.
    pub const fn new(engine: SoilProfileEngine, soil_health: Option<SoilHealthClient>) -> Self {
        Self {
            engine,
            soil_health,
        }
    }
}
