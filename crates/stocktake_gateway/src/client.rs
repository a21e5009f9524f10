// --- File: crates/stocktake_gateway/src/client.rs ---
//! HTTP client construction.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;

/// Per-request timeout in seconds, sized for the backend's slowest endpoint.
pub const REQUEST_TIMEOUT_SECS: u64 = 45;

/// Builds the HTTP client for a single gateway call.
///
/// Each call gets its own client and drops it on the way out, so connection
/// resources are released as soon as the call finishes, on every exit path.
/// The client carries the fixed timeout and the `accept: application/json`
/// header every backend request must send.
pub(crate) fn build_client() -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .default_headers(headers)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_defaults() {
        assert!(build_client().is_ok());
    }
}
