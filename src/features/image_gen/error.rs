//! Image generation failures and their chat-facing messages

use thiserror::Error;

/// Shown when no usable configuration is available
pub const NOT_CONFIGURED_MESSAGE: &str =
    "You did not configure the API key for the image generation API!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("request to image API failed: {0}")]
    Transport(String),

    #[error("image API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed image API response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Short message suitable for returning as chat output
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::EmptyPrompt => {
                "Please describe the image you want me to generate."
            }
            GenerationError::Api { status, message } => {
                let message = message.to_lowercase();
                if *status == 401 {
                    "The image generation API rejected the configured API key."
                } else if message.contains("content_policy") || message.contains("safety") {
                    "Your prompt was rejected by the image generation safety system. Please try a different prompt."
                } else if *status == 429 && (message.contains("billing") || message.contains("quota")) {
                    "The image generation quota has been reached. Please try again later."
                } else if *status == 429 {
                    "Too many image requests. Please wait a moment and try again."
                } else {
                    "Failed to generate image. Please try again with a different prompt."
                }
            }
            GenerationError::Transport(_) => {
                "Could not reach the image generation API. Please try again later."
            }
            GenerationError::MalformedResponse(_) => {
                "The image generation API returned an unexpected response."
            }
        }
    }
}
