// --- File: crates/stocktake_common/src/services.rs ---
//! Service abstractions for device capabilities.
//!
//! This module provides trait definitions for the platform services the
//! gateway depends on. The traits allow for dependency injection and easier
//! testing by decoupling the HTTP logic from the device shell that hosts it.

use std::error::Error as StdError;

/// A trait for checking network reachability.
///
/// Implemented by the device shell over whatever reachability API the
/// platform offers. The gateway never probes the network itself.
pub trait ConnectivityService: Send + Sync {
    /// Returns true when the device currently has an internet connection.
    fn has_internet(&self) -> bool;
}

/// A trait for surfacing short messages to the user.
pub trait AlertService: Send + Sync {
    /// Show a transient toast-style message.
    fn show_toast(&self, message: &str);
}

/// A trait for forwarding errors to crash reporting or analytics.
pub trait TelemetryService: Send + Sync {
    /// Record an error for later inspection. Must not block or fail.
    fn report_error(&self, error: &(dyn StdError + 'static));
}
