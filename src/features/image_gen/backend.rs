//! Image generations API: request/response payloads and the HTTP backend
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Extract upstream error messages from non-2xx responses
//! - 1.0.0: Initial release with single POST to /images/generations

use async_trait::async_trait;
use log::{debug, error};
use serde::{Deserialize, Serialize};

use super::error::GenerationError;
use crate::core::config::DEFAULT_BASE_URL;
use crate::features::settings::{Configuration, ImageSize, Model, Quality, Style};

/// Body of `POST /images/generations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub model: Model,
    pub prompt: String,
    pub size: ImageSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl GenerationRequest {
    /// Copy generation parameters from the configuration; DALL-E 2 takes no quality/style
    pub fn new(prompt: impl Into<String>, config: &Configuration) -> Self {
        let model = config.model();
        let (quality, style) = if model.supports_quality_and_style() {
            (Some(config.quality()), Some(config.style()))
        } else {
            (None, None)
        };

        GenerationRequest {
            model,
            prompt: prompt.into(),
            size: config.image_size(),
            quality,
            style,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    pub revised_prompt: Option<String>,
}

impl ImageResponse {
    /// The first generated image; missing data or URL is a malformed response
    pub fn first_image(self) -> Result<ImageData, GenerationError> {
        let image = self.data.into_iter().next().ok_or_else(|| {
            GenerationError::MalformedResponse("response contains no images".to_string())
        })?;

        match image.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(image),
            _ => Err(GenerationError::MalformedResponse(
                "first image has no url".to_string(),
            )),
        }
    }
}

/// Upstream error envelope: `{"error": {"message": ...}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Prefer the upstream `error.message`, fall back to the raw body
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}

/// Something that can turn a generation request into an image response
#[async_trait]
pub trait ImageBackend: Send + Sync {
    async fn create_image(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<ImageResponse, GenerationError>;
}

/// reqwest-backed client for the OpenAI images endpoint
#[derive(Clone)]
pub struct OpenAiImageClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenAiImageClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        OpenAiImageClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/images/generations", self.base_url)
    }
}

impl Default for OpenAiImageClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl ImageBackend for OpenAiImageClient {
    async fn create_image(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<ImageResponse, GenerationError> {
        let endpoint = self.endpoint();
        debug!(
            "POST {} | Model: {} | Size: {}",
            endpoint,
            request.model.as_str(),
            request.size.as_str()
        );

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Image API request failed: {e}");
                GenerationError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&body);
            error!("Image API error | Status: {status} | {message}");
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Unexpected image API response: {e}");
            GenerationError::MalformedResponse(e.to_string())
        })
    }
}
