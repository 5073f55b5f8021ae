//! HTTP transport seam.
//!
//! The client hands a fully built `http::Request` to a [`Transport`] and gets
//! the buffered response back. Production traffic goes through reqwest;
//! tests can substitute an in-memory transport.

use std::future::Future;

use bytes::Bytes;
use reqwest::Client;
use url::Url;

use crate::api::error::ApiError;

/// Sends one request and buffers the response body.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = Result<http::Response<Bytes>, ApiError>> + Send;
}

/// reqwest-backed transport.
///
/// Relative targets (empty base) are joined onto `origin` when one is set,
/// mirroring how a browser resolves them against the page. Without an origin
/// reqwest rejects the relative URL and that error is returned as-is.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
    origin: Option<Url>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `origin` as the page origin for relative targets.
    pub fn with_origin(origin: Url) -> Self {
        Self {
            client: Client::new(),
            origin: Some(origin),
        }
    }

    /// Reuse an existing reqwest client (connection pool, proxies, TLS).
    pub fn from_client(client: Client, origin: Option<Url>) -> Self {
        Self { client, origin }
    }

    pub fn origin(&self) -> Option<&Url> {
        self.origin.as_ref()
    }

    fn resolve(&self, uri: &http::Uri) -> Result<String, ApiError> {
        let target = uri.to_string();
        match (&self.origin, uri.scheme()) {
            (Some(origin), None) => Ok(origin.join(&target)?.to_string()),
            _ => Ok(target),
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Bytes>, ApiError> {
        let (parts, body) = request.into_parts();
        let url = self.resolve(&parts.uri)?;

        let outbound = self
            .client
            .request(parts.method, url)
            .headers(parts.headers)
            .body(body)
            .build()?;

        let response = self.client.execute(outbound).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        let mut buffered = http::Response::new(body);
        *buffered.status_mut() = status;
        *buffered.headers_mut() = headers;
        Ok(buffered)
    }
}
