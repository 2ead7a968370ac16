use std::net::SocketAddr;

use serde::Deserialize;

/// Address the server binds to when none is configured
pub const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 3000);

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
}

impl ServerConfig {
    /// Configured listen address, falling back to `0.0.0.0:3000`
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address.unwrap_or(DEFAULT_LISTEN_ADDRESS)
    }
}

/// Health check endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    /// Mount `GET <path>` returning `ok`
    #[serde(default = "default_health_enabled")]
    pub enabled: bool,
    #[serde(default = "default_health_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_health_enabled(),
            path: default_health_path(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_health_enabled() -> bool {
    true
}

fn default_health_path() -> String {
    "/health".to_string()
}
