//! Error definitions for the analysis client.

use thiserror::Error;

/// Errors surfaced by [`AnalyzeClient`](crate::api::AnalyzeClient).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status.
    #[error("API {status}: {body}")]
    RequestFailure { status: u16, body: String },

    /// Network-level failure, passed through from the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Request body could not be encoded or the response body decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The request could not be assembled (e.g., an unusable base).
    #[error("invalid request: {0}")]
    Request(#[from] http::Error),

    /// A relative target could not be joined onto the page origin.
    #[error("invalid request target: {0}")]
    Target(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status for backend-reported failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailure { status, .. } => Some(*status),
            _ => None,
        }
    }
}
