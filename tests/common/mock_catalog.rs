//! Mock catalog API for fetcher tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Response, StatusCode};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};

/// A canned response for the catalog route.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "unavailable"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    response: Arc<MockResponse>,
    content_types: Arc<Mutex<Vec<Option<String>>>>,
}

pub struct MockCatalog {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockCatalog {
    pub async fn start(response: MockResponse) -> Self {
        let state = MockState {
            response: Arc::new(response),
            content_types: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/api/data", get(serve_catalog))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock catalog");
        let addr = listener.local_addr().expect("mock catalog address");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("mock catalog server failed");
        });

        Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/api/data", self.addr)
    }

    /// `Content-Type` header of every request received so far.
    pub async fn request_content_types(&self) -> Vec<Option<String>> {
        self.state.content_types.lock().await.clone()
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_catalog(State(state): State<MockState>, headers: HeaderMap) -> Response<Body> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.content_types.lock().await.push(content_type);

    if state.response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.response.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(state.response.status).unwrap_or(StatusCode::OK))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(state.response.body.clone()))
        .expect("mock response")
}
