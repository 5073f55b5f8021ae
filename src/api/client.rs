//! Client for the notes analysis endpoint.

use http::header::CONTENT_TYPE;
use http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::error::ApiError;
use crate::api::transport::{ReqwestTransport, Transport};
use crate::api::types::{AnalysisReport, AnalyzeRequest};
use crate::config::ApiConfig;

/// Path of the analysis endpoint, relative to the configured base.
pub const ANALYZE_PATH: &str = "/api/analyze/";

/// Submits notes to the analysis backend.
///
/// Cheap to clone and safe to share between tasks: it holds only the base
/// origin and the transport.
#[derive(Debug, Clone)]
pub struct AnalyzeClient<T = ReqwestTransport> {
    base: String,
    transport: T,
}

impl AnalyzeClient {
    /// Create a client for `base` ("" for same-origin relative requests).
    pub fn new(base: &str) -> Self {
        Self::with_transport(base, ReqwestTransport::new())
    }

    /// Build a client from validated configuration.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let transport = match &config.origin {
            Some(origin) => ReqwestTransport::with_origin(Url::parse(origin)?),
            None => ReqwestTransport::new(),
        };
        Ok(Self::with_transport(config.normalized_base(), transport))
    }
}

impl<T: Transport> AnalyzeClient<T> {
    pub fn with_transport(base: &str, transport: T) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Request target: `{base}/api/analyze/`.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base, ANALYZE_PATH)
    }

    /// Build the exact request [`analyze_notes`](Self::analyze_notes) sends.
    pub fn build_request(&self, notes_text: &str) -> Result<http::Request<Vec<u8>>, ApiError> {
        let body = serde_json::to_vec(&AnalyzeRequest { notes_text })?;
        let request = http::Request::builder()
            .method(Method::POST)
            .uri(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .body(body)?;
        Ok(request)
    }

    /// Send `notes_text` for analysis and decode the JSON reply as `R`.
    ///
    /// A non-2xx reply fails with [`ApiError::RequestFailure`] carrying the
    /// status and the body as text.
    pub async fn analyze_notes<R: DeserializeOwned>(&self, notes_text: &str) -> Result<R, ApiError> {
        let request = self.build_request(notes_text)?;
        tracing::debug!(
            target_uri = %request.uri(),
            notes_chars = notes_text.chars().count(),
            "Submitting notes for analysis"
        );

        let response = self.transport.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = String::from_utf8_lossy(response.body()).into_owned();
            tracing::warn!(status = status.as_u16(), "Analysis request rejected");
            return Err(ApiError::RequestFailure {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "Analysis response received");
        Ok(serde_json::from_slice(response.body())?)
    }

    /// [`analyze_notes`](Self::analyze_notes) with the opaque JSON result.
    pub async fn analyze_value(&self, notes_text: &str) -> Result<Value, ApiError> {
        self.analyze_notes(notes_text).await
    }

    /// [`analyze_notes`](Self::analyze_notes) decoded as an [`AnalysisReport`].
    pub async fn analyze_report(&self, notes_text: &str) -> Result<AnalysisReport, ApiError> {
        self.analyze_notes(notes_text).await
    }
}
