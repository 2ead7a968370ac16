use std::net::SocketAddr;

use axum::Router;
use easel_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the image generation subsystem fails to initialize
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address();

        let imagegen_state = easel_imagegen::build_server(config)?;

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health));
        }

        // Image generation route
        app = app.merge(easel_imagegen::endpoint_router(&config.imagegen.path).with_state(imagegen_state));

        app = app.layer(TraceLayer::new_for_http());

        tracing::debug!(
            path = %config.imagegen.path,
            health_enabled = config.server.health.enabled,
            "router assembled"
        );

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address, e.g. from the command line
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered. In-flight provider
    /// calls are dropped together with their connection if the client goes
    /// away first.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Liveness probe; answers as long as the process serves requests
async fn health() -> &'static str {
    "ok"
}
