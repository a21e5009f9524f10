// --- File: crates/stocktake_common/src/lib.rs ---

// Declare modules within this crate
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export the capability traits for easier access
pub use services::{AlertService, ConnectivityService, TelemetryService};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// This crate provides functionality shared across the Stocktake app crates:
// trait abstractions over device capabilities and logging setup.
