#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod prompt;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::Method,
    routing::any,
};

pub use error::{ImageGenError, Result};
pub use server::{ImageGenServerBuilder, Server};
pub use types::ImageResponse;

/// Build the image generation server from configuration
///
/// # Errors
///
/// Returns an error if the timeout is invalid or the HTTP client cannot be built
pub fn build_server(config: &easel_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        ImageGenServerBuilder::new(&config.imagegen)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize image generation server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for image generation
///
/// The route accepts every method so that non-POST requests get a JSON 405
/// instead of axum's empty one.
pub fn endpoint_router(path: &str) -> Router<Arc<Server>> {
    Router::new().route(path, any(generate))
}

/// Handle image generation requests
async fn generate(
    State(server): State<Arc<Server>>,
    method: Method,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<ImageResponse>> {
    if method != Method::POST {
        return Err(ImageGenError::MethodNotAllowed);
    }

    let body = body.map_err(|e| ImageGenError::Internal(e.to_string()))?;
    let prompt = prompt::extract_prompt(&body)?;

    tracing::debug!(prompt_len = prompt.len(), "image generation handler called");

    let response = server.generate(&prompt).await?;

    tracing::debug!("image generation complete");

    Ok(Json(response))
}
