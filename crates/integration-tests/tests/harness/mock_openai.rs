//! Mock image generation backend for integration tests
//!
//! Implements just enough of the OpenAI Images API to exercise the relay

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with a fresh URL per request
    Image,
    /// 200 with the given JSON body
    Json(serde_json::Value),
    /// The given status with a plain text body
    Status(u16, &'static str),
    /// 200 with a fresh URL, after sleeping
    Delayed(Duration),
}

/// Mock provider that counts requests and records what it received
pub struct MockOpenAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    reply: MockReply,
    request_count: AtomicU32,
    last_body: Mutex<Option<serde_json::Value>>,
    last_authorization: Mutex<Option<String>>,
}

impl MockOpenAi {
    /// Start a mock that returns a new image URL for every request
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(MockReply::Image).await
    }

    /// Start a mock with a fixed reply
    pub async fn start_with(reply: MockReply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            request_count: AtomicU32::new(0),
            last_body: Mutex::new(None),
            last_authorization: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/images/generations", routing::post(handle_imagegen))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the provider
    ///
    /// Includes `/v1` since the provider appends `/images/generations`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of image generation requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::SeqCst)
    }

    /// JSON body of the most recent request
    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.state.last_body.lock().unwrap().clone()
    }

    /// `Authorization` header of the most recent request
    pub fn last_authorization(&self) -> Option<String> {
        self.state.last_authorization.lock().unwrap().clone()
    }
}

impl Drop for MockOpenAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_imagegen(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let n = state.request_count.fetch_add(1, Ordering::SeqCst) + 1;

    *state.last_body.lock().unwrap() = Some(body);
    *state.last_authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    match &state.reply {
        MockReply::Image => image(n).into_response(),
        MockReply::Json(body) => Json(body.clone()).into_response(),
        MockReply::Status(status, text) => {
            (StatusCode::from_u16(*status).unwrap(), *text).into_response()
        }
        MockReply::Delayed(delay) => {
            tokio::time::sleep(*delay).await;
            image(n).into_response()
        }
    }
}

fn image(n: u32) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "created": 1_700_000_000,
        "data": [{ "url": format!("https://example.com/mock-image-{n}.png") }]
    }))
}
