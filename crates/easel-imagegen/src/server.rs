use secrecy::SecretString;

use crate::{
    error::{ImageGenError, Result},
    provider::{ImageGenProvider, openai::OpenAiImageGenProvider},
    types::ImageResponse,
};

/// Image generation server holding the provider and its credential
pub struct Server {
    provider: Box<dyn ImageGenProvider>,
    api_key: Option<SecretString>,
}

impl Server {
    pub(crate) fn new(provider: Box<dyn ImageGenProvider>, api_key: Option<SecretString>) -> Self {
        Self { provider, api_key }
    }

    /// Generate one image for an already validated prompt
    ///
    /// The credential is checked here rather than at startup so that a
    /// misconfigured deployment still answers every request with JSON.
    pub async fn generate(&self, prompt: &str) -> Result<ImageResponse> {
        let api_key = self.api_key.as_ref().ok_or(ImageGenError::MissingApiKey)?;

        let url = self.provider.generate(prompt, api_key).await?;

        Ok(ImageResponse { url })
    }
}

/// Builder for constructing the image generation server from configuration
pub struct ImageGenServerBuilder<'a> {
    config: &'a easel_config::ImageGenConfig,
}

impl<'a> ImageGenServerBuilder<'a> {
    pub fn new(config: &'a easel_config::ImageGenConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> anyhow::Result<Server> {
        let timeout = self.config.timeout()?;

        let provider = OpenAiImageGenProvider::new(self.config.base_url.as_ref(), timeout)
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

        let api_key = self.config.api_key().cloned();

        if api_key.is_none() {
            tracing::warn!("no OpenAI API key configured; image requests will fail until one is set");
        }

        tracing::debug!(
            provider = provider.name(),
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            "image generation server initialized"
        );

        Ok(Server::new(Box::new(provider), api_key))
    }
}
