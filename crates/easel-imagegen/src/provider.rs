pub(crate) mod openai;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::Result;

/// Trait for image generation provider implementations
#[async_trait]
pub(crate) trait ImageGenProvider: Send + Sync {
    /// Generate one image for `prompt` and return its URL
    async fn generate(&self, prompt: &str, api_key: &SecretString) -> Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}
