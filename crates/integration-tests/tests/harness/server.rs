//! Test server wrapper that starts Easel on a random port

use std::net::SocketAddr;

use easel_config::Config;
use easel_server::Server;
use tokio_util::sync::CancellationToken;

/// Default route of the image endpoint
pub const IMAGE_PATH: &str = "/api/generate-image";

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(&config)?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST a raw body to the image endpoint and decode the JSON reply
    pub async fn generate_raw(&self, body: &str) -> (u16, serde_json::Value) {
        let resp = self
            .client
            .post(self.url(IMAGE_PATH))
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .unwrap();

        let status = resp.status().as_u16();
        assert_eq!(resp.headers()["content-type"], "application/json");

        (status, resp.json().await.unwrap())
    }

    /// POST `{"prompt": ...}` to the image endpoint
    pub async fn generate(&self, prompt: &str) -> (u16, serde_json::Value) {
        self.generate_raw(&serde_json::json!({ "prompt": prompt }).to_string())
            .await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
