use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageGenError>;

/// Every way an image request can end short of a URL
///
/// The display string of each variant is the `error` field of the JSON body
/// returned to the caller.
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// Request used a method other than POST
    #[error("Method not allowed. Use POST.")]
    MethodNotAllowed,

    /// Prompt was absent or blank after trimming
    #[error("Missing prompt.")]
    MissingPrompt,

    /// No provider API key was configured
    #[error("OPENAI_API_KEY is not set.")]
    MissingApiKey,

    /// Provider answered with a non-success status
    #[error("OpenAI request failed")]
    ProviderApiError { status: u16, body: String },

    /// Provider answered successfully but without `data[0].url`
    #[error("No image URL returned from OpenAI.")]
    MissingImageUrl,

    /// Anything else: unreadable body, malformed JSON, network failure
    #[error("Server error")]
    Internal(String),
}

impl ImageGenError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingPrompt => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::ProviderApiError { .. } | Self::MissingImageUrl | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Extra context passed through to the caller, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ProviderApiError { body, .. } => Some(body),
            Self::Internal(detail) => Some(detail),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ImageGenError {
    fn from(error: reqwest::Error) -> Self {
        Self::Internal(error.to_string())
    }
}

impl From<serde_json::Error> for ImageGenError {
    fn from(error: serde_json::Error) -> Self {
        Self::Internal(error.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl IntoResponse for ImageGenError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Internal(ref detail) = self {
            tracing::error!(%detail, "image request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            detail: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}
