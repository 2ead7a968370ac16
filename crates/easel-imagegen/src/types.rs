use serde::{Deserialize, Serialize};

/// Successful reply to the caller
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageResponse {
    /// URL of the generated image
    pub url: String,
}
