//! Error types for the extraction boundary

use thiserror::Error;

/// Errors that can occur while decoding an extraction response
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The response was not usable JSON
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ExtractError {
    fn from(e: serde_json::Error) -> Self {
        ExtractError::JsonParse(e.to_string())
    }
}
