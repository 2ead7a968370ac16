#![allow(clippy::must_use_candidate)]

mod env;
pub mod imagegen;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use imagegen::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Easel configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Image generation endpoint and provider configuration
    #[serde(default)]
    pub imagegen: ImageGenConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
