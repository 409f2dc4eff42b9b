//! Mock form-relay server for end-to-end contact form tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured submission for assertions.
#[derive(Debug, Clone)]
pub struct CapturedSubmission {
    pub method: String,
    pub content_type: String,
    pub body: serde_json::Value,
}

/// A canned relay response.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: u16,
    pub delay_ms: u64,
}

impl Default for RelayResponse {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: 0,
        }
    }
}

impl RelayResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct RelayState {
    submissions: Arc<Mutex<Vec<CapturedSubmission>>>,
    responses: Arc<Mutex<VecDeque<RelayResponse>>>,
}

/// In-process stand-in for the third-party form relay.
pub struct MockRelay {
    pub addr: SocketAddr,
    state: RelayState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockRelay {
    pub async fn start() -> Self {
        let state = RelayState {
            submissions: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_submission))
            .route("/", any(handle_submission))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock relay");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for the server to come up
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Enqueue the response for the next submission.
    pub async fn enqueue(&self, resp: RelayResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    /// All submissions received so far.
    pub async fn submissions(&self) -> Vec<CapturedSubmission> {
        self.state.submissions.lock().await.clone()
    }

    /// Endpoint URL for pointing a relay client at this server.
    pub fn endpoint(&self) -> String {
        format!("http://{}/f/test", self.addr)
    }
}

impl Drop for MockRelay {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_submission(State(state): State<RelayState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body_bytes = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    state.submissions.lock().await.push(CapturedSubmission {
        method,
        content_type,
        body,
    });

    let resp = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_default();

    if resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(resp.status).unwrap())
        .body(Body::empty())
        .unwrap()
}
