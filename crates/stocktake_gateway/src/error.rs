// --- File: crates/stocktake_gateway/src/error.rs ---
use thiserror::Error;

/// Gateway-specific error types.
///
/// Every gateway operation resolves to one of these. The variants keep the
/// failure kinds apart so callers can tell "device had no connection" from
/// "the backend said no" without string matching.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The device reported no internet connection; no request was sent
    #[error("Device is offline, request was not sent")]
    Offline,

    /// The HTTP client itself could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientUnavailable(#[source] reqwest::Error),

    /// Error occurred while sending the request or reading the response
    #[error("Backend request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the backend
    #[error("Backend returned an error: {body} (Status: {status})")]
    ApiError { status: u16, body: String },

    /// The request payload could not be serialized to JSON
    #[error("Failed to encode request body: {0}")]
    EncodingError(String),

    /// Error parsing the backend response
    #[error("Failed to parse backend response: {0}")]
    ParseError(#[from] serde_json::Error),
}
