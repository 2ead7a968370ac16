use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::ImageGenProvider;
use crate::error::{ImageGenError, Result};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const MODEL: &str = "gpt-image-1";
const SIZE: &str = "1024x1024";
const IMAGE_COUNT: u32 = 1;

/// `OpenAI` image generation provider
pub(crate) struct OpenAiImageGenProvider {
    client: Client,
    endpoint: String,
}

impl OpenAiImageGenProvider {
    /// Create a provider whose calls give up after `timeout`
    pub fn new(base_url: Option<&Url>, timeout: Duration) -> reqwest::Result<Self> {
        let base_url = base_url.map_or(DEFAULT_BASE_URL, Url::as_str);
        let endpoint = format!("{}/images/generations", base_url.trim_end_matches('/'));

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }
}

/// Wire format for the `OpenAI` image generation API request
#[derive(Serialize)]
struct OpenAiImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    n: u32,
}

#[async_trait]
impl ImageGenProvider for OpenAiImageGenProvider {
    async fn generate(&self, prompt: &str, api_key: &SecretString) -> Result<String> {
        let wire_request = OpenAiImageRequest {
            model: MODEL,
            prompt,
            size: SIZE,
            n: IMAGE_COUNT,
        };

        tracing::debug!(endpoint = %self.endpoint, model = MODEL, "sending image generation request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "image generation request failed"))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;

            tracing::error!(status = %status, body = %body, "OpenAI image generation API error");

            return Err(ImageGenError::ProviderApiError {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to parse OpenAI image generation response");
        })?;

        let url = payload
            .pointer("/data/0/url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .ok_or(ImageGenError::MissingImageUrl)?;

        tracing::debug!("image generation request complete");

        Ok(url.to_owned())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
