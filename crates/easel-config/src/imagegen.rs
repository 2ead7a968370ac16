use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// Image generation endpoint and provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGenConfig {
    /// Route the image endpoint is mounted on
    #[serde(default = "default_path")]
    pub path: String,
    /// Provider API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override, e.g. for an OpenAI-compatible proxy
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Upper bound on a single provider call (e.g. "60s", "2m")
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for ImageGenConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            api_key: None,
            base_url: None,
            timeout: default_timeout(),
        }
    }
}

impl ImageGenConfig {
    /// The configured API key, treating an empty value as unset
    ///
    /// An empty key usually comes from `{{ env.OPENAI_API_KEY | default("") }}`
    /// in a deployment where the variable is missing.
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    /// Parsed provider call timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout string is not a valid duration
    pub fn timeout(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.timeout)
            .map_err(|e| anyhow::anyhow!("invalid imagegen.timeout '{}': {e}", self.timeout))
    }
}

fn default_path() -> String {
    "/api/generate-image".to_string()
}

fn default_timeout() -> String {
    "60s".to_string()
}
