// --- File: crates/stocktake_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Backend API Config ---
// Holds everything the HTTP gateway needs to reach the REST backend. The
// base URL is mandatory; there is nothing secret in here.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Origin of the REST backend, e.g. "https://api.stocktake.app".
    pub base_url: String,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Backend access is mandatory; the app cannot run without a base URL.
    pub api: ApiConfig,
}
