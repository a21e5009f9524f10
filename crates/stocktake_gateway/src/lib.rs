// --- File: crates/stocktake_gateway/src/lib.rs ---
//! HTTP gateway for the Stocktake app.
//!
//! This crate carries every HTTP conversation between the app and its REST
//! backend: JSON reads and writes plus multipart image upload. Device
//! concerns (network reachability, user-facing toasts, crash reporting) are
//! injected through the trait abstractions in `stocktake_common`, so the
//! gateway itself stays free of platform code and fully testable.

// Declare modules within this crate
pub mod client; // HTTP client construction
pub mod error; // Error handling
pub mod gateway; // Request dispatch and failure policy
pub mod models; // Wire model conventions and shared types

// Re-export the main types for easier access
pub use client::REQUEST_TIMEOUT_SECS;
pub use error::GatewayError;
pub use gateway::{HttpGateway, COMMON_ERROR_MESSAGE};
pub use models::UploadImageResponse;
