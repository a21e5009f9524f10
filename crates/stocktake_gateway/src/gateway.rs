// --- File: crates/stocktake_gateway/src/gateway.rs ---
//! Request dispatch and the uniform failure policy.

use reqwest::{header, multipart, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use stocktake_common::services::{AlertService, ConnectivityService, TelemetryService};
use stocktake_config::ApiConfig;

use crate::client::build_client;
use crate::error::GatewayError;
use crate::models::UploadImageResponse;

/// Message shown for failures the backend did not phrase itself.
pub const COMMON_ERROR_MESSAGE: &str = "We having some trouble completing your request at the moment. Please try again shortly, and if it persists let us know.";

// Multipart field layout the upload endpoint expects.
const IMAGE_FIELD: &str = "image[]";
const IMAGE_FILE_NAME: &str = "image.jpg";

/// Gateway for all HTTP conversations between the app and its REST backend.
///
/// Holds no per-request state: each call builds a fresh HTTP client, runs one
/// request against `{base_url}/{path}` and reports failures through the
/// injected device services. Cloning is cheap and instances are safe to share
/// across tasks.
#[derive(Clone)]
pub struct HttpGateway {
    config: ApiConfig,
    connectivity: Arc<dyn ConnectivityService>,
    alerts: Arc<dyn AlertService>,
    telemetry: Arc<dyn TelemetryService>,
}

impl HttpGateway {
    /// Creates a new gateway over the given backend and device services.
    pub fn new(
        config: ApiConfig,
        connectivity: Arc<dyn ConnectivityService>,
        alerts: Arc<dyn AlertService>,
        telemetry: Arc<dyn TelemetryService>,
    ) -> Self {
        Self {
            config,
            connectivity,
            alerts,
            telemetry,
        }
    }

    /// Fetches `path` and decodes the JSON response into `T`.
    ///
    /// The one operation with a connectivity pre-check: offline, it returns
    /// `Err(Offline)` without sending anything and without bothering the
    /// user. Reads are retried naturally when the screen refreshes.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let outcome = if self.connectivity.has_internet() {
            self.request_json(Method::GET, path, None).await
        } else {
            debug!("[Gateway] GET {} skipped, device is offline", path);
            Err(GatewayError::Offline)
        };
        self.notify_failure(outcome)
    }

    /// Sends `body` as JSON to `path` and decodes the response into `Res`.
    pub async fn post<Req, Res>(&self, path: &str, body: &Req) -> Result<Res, GatewayError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let outcome = match encode(body) {
            Ok(json) => self.request_json(Method::POST, path, Some(json)).await,
            Err(error) => Err(error),
        };
        self.notify_failure(outcome)
    }

    /// Sends a bodiless POST to `path` and decodes the response into `Res`.
    ///
    /// The request carries a zero-length body with the JSON content type,
    /// the shape the backend expects for parameterless actions.
    pub async fn post_empty<Res>(&self, path: &str) -> Result<Res, GatewayError>
    where
        Res: DeserializeOwned,
    {
        let outcome = self
            .request_json(Method::POST, path, Some(String::new()))
            .await;
        self.notify_failure(outcome)
    }

    /// Issues a DELETE against `path` and decodes the response into `Res`.
    pub async fn delete<Res>(&self, path: &str) -> Result<Res, GatewayError>
    where
        Res: DeserializeOwned,
    {
        let outcome = self.request_json(Method::DELETE, path, None).await;
        self.notify_failure(outcome)
    }

    /// Issues a DELETE with a JSON body, for endpoints whose selection
    /// criteria do not fit in the path.
    pub async fn delete_with_body<Req, Res>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Res, GatewayError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let outcome = match encode(body) {
            Ok(json) => self.request_json(Method::DELETE, path, Some(json)).await,
            Err(error) => Err(error),
        };
        self.notify_failure(outcome)
    }

    /// Uploads a JPEG image to `path` as a multipart form.
    ///
    /// The image travels as a single `image[]` part named `image.jpg`.
    /// Failures take the same path as every JSON operation: reported,
    /// toasted, and returned as a typed error.
    pub async fn upload_images(
        &self,
        path: &str,
        image: Vec<u8>,
    ) -> Result<UploadImageResponse, GatewayError> {
        let outcome = self.send_image(path, image).await;
        self.notify_failure(outcome)
    }

    async fn send_image(
        &self,
        path: &str,
        image: Vec<u8>,
    ) -> Result<UploadImageResponse, GatewayError> {
        let url = self.endpoint(path);
        debug!("[Gateway] POST {} (multipart image upload)", url);

        let part = multipart::Part::bytes(image).file_name(IMAGE_FILE_NAME);
        let form = multipart::Form::new().part(IMAGE_FIELD, part);

        let client = build_client().map_err(GatewayError::ClientUnavailable)?;
        let response = client.post(&url).multipart(form).send().await?;
        let body = handle_response(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(path);
        debug!("[Gateway] {} {}", method, url);

        let client = build_client().map_err(GatewayError::ClientUnavailable)?;
        let mut request = client.request(method, &url);
        if let Some(json) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
                .body(json);
        }

        let response = request.send().await?;
        let body = handle_response(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Joins `path` onto the configured base URL with a single separating
    /// slash, whatever either side carries.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Applies the failure policy before handing the outcome back to the
    /// caller: offline stays silent, backend errors surface their own body
    /// text, everything else gets the generic message. Telemetry hears about
    /// every failure except the offline short-circuit, exactly once.
    fn notify_failure<T>(&self, outcome: Result<T, GatewayError>) -> Result<T, GatewayError> {
        if let Err(error) = &outcome {
            match error {
                GatewayError::Offline => {}
                GatewayError::ApiError { status, body } => {
                    error!("[Gateway] Backend error {}: {}", status, body);
                    self.telemetry.report_error(error);
                    self.alerts.show_toast(body);
                }
                other => {
                    error!("[Gateway] Request failed: {}", other);
                    self.telemetry.report_error(other);
                    self.alerts.show_toast(COMMON_ERROR_MESSAGE);
                }
            }
        }
        outcome
    }
}

/// Serializes a request payload, mapping the failure into the gateway's own
/// error space.
fn encode<Req: Serialize>(body: &Req) -> Result<String, GatewayError> {
    serde_json::to_string(body).map_err(|e| GatewayError::EncodingError(e.to_string()))
}

/// Reads the response body as text and classifies the outcome by status.
///
/// The body is read in full for every response. Non-success statuses carry
/// it back raw inside `ApiError` so the caller can show the backend's own
/// wording; 401 and 403 take the same path as any other failure status.
async fn handle_response(response: Response) -> Result<String, GatewayError> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await?;

    if status.is_success() {
        Ok(body)
    } else {
        warn!("[Gateway] Backend responded {} for {}", status, url);
        Err(GatewayError::ApiError {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Online;
    impl ConnectivityService for Online {
        fn has_internet(&self) -> bool {
            true
        }
    }

    struct NoAlerts;
    impl AlertService for NoAlerts {
        fn show_toast(&self, _message: &str) {}
    }

    struct NoTelemetry;
    impl TelemetryService for NoTelemetry {
        fn report_error(&self, _error: &(dyn std::error::Error + 'static)) {}
    }

    fn gateway(base_url: &str) -> HttpGateway {
        HttpGateway::new(
            ApiConfig {
                base_url: base_url.to_string(),
            },
            Arc::new(Online),
            Arc::new(NoAlerts),
            Arc::new(NoTelemetry),
        )
    }

    #[test]
    fn test_endpoint_joins_with_a_single_slash() {
        let gateway = gateway("https://api.example.test");
        assert_eq!(
            gateway.endpoint("v1/items"),
            "https://api.example.test/v1/items"
        );
        assert_eq!(
            gateway.endpoint("/v1/items"),
            "https://api.example.test/v1/items"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash_on_base_url() {
        let gateway = gateway("https://api.example.test/");
        assert_eq!(
            gateway.endpoint("v1/items"),
            "https://api.example.test/v1/items"
        );
        assert_eq!(
            gateway.endpoint("/v1/items"),
            "https://api.example.test/v1/items"
        );
    }

    #[test]
    fn test_encode_failures_map_to_encoding_error() {
        // serde_json refuses maps whose keys are not strings.
        let mut weird = std::collections::HashMap::new();
        weird.insert(vec![1u8], 1);
        let err = encode(&weird).unwrap_err();
        assert!(matches!(err, GatewayError::EncodingError(_)));
    }
}
