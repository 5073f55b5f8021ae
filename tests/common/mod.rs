//! Shared utilities for integration testing.

use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode, Uri},
    Router,
};
use opsnotes::api::{AnalyzeClient, ReqwestTransport};
use tokio::net::TcpListener;

/// A request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct Received {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct MockBackend {
    /// `http://127.0.0.1:<port>`
    pub base: String,
    pub received: Arc<Mutex<Vec<Received>>>,
}

impl MockBackend {
    pub fn requests(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

struct BackendState<F> {
    respond: Arc<F>,
    received: Arc<Mutex<Vec<Received>>>,
}

// Manual impl: derive would demand `F: Clone`.
impl<F> Clone for BackendState<F> {
    fn clone(&self) -> Self {
        Self {
            respond: self.respond.clone(),
            received: self.received.clone(),
        }
    }
}

/// Start a mock backend that returns a fixed response to every request.
#[allow(dead_code)]
pub async fn start_mock_backend(status: u16, body: &'static str) -> MockBackend {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}

/// Start a programmable mock backend. The closure receives the request body.
pub async fn start_programmable_backend<F, Fut>(f: F) -> MockBackend
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = BackendState {
        respond: Arc::new(f),
        received: received.clone(),
    };

    let app = Router::new().fallback(record::<F, Fut>).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockBackend {
        base: format!("http://{addr}"),
        received,
    }
}

async fn record<F, Fut>(
    State(state): State<BackendState<F>>,
    method: axum::http::Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    state.received.lock().unwrap().push(Received {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    let (status, reply) = (state.respond)(body).await;
    (StatusCode::from_u16(status).unwrap(), reply)
}

/// Client that bypasses any proxy configured in the environment.
#[allow(dead_code)]
pub fn client(base: &str, origin: Option<&str>) -> AnalyzeClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let origin = origin.map(|o| url::Url::parse(o).unwrap());
    AnalyzeClient::with_transport(base, ReqwestTransport::from_client(http, origin))
}
