//! Prompt to image translation
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Convert transport and response failures into chat messages
//! - 1.1.0: Skip quality/style for DALL-E 2
//! - 1.0.0: Initial release

use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use super::backend::{GenerationRequest, ImageBackend, OpenAiImageClient};
use super::error::{GenerationError, NOT_CONFIGURED_MESSAGE};
use super::render::render_image_tag;
use crate::features::settings::{Configuration, ImageSize};

/// A successfully generated image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: Option<String>,
    pub size: ImageSize,
}

impl GeneratedImage {
    pub fn to_markup(&self) -> String {
        render_image_tag(&self.url, self.size)
    }
}

#[derive(Clone)]
pub struct ImageGenerator {
    backend: Arc<dyn ImageBackend>,
}

impl ImageGenerator {
    pub fn new(backend: Arc<dyn ImageBackend>) -> Self {
        ImageGenerator { backend }
    }

    /// Generator talking to the OpenAI API at `base_url`
    pub fn openai(base_url: &str) -> Self {
        Self::new(Arc::new(OpenAiImageClient::new(base_url)))
    }

    /// Generate an image, returning typed errors
    pub async fn try_generate(
        &self,
        prompt: &str,
        config: &Configuration,
    ) -> Result<GeneratedImage, GenerationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }

        let request = GenerationRequest::new(prompt, config);
        let image = self
            .backend
            .create_image(config.api_key(), &request)
            .await?
            .first_image()?;

        Ok(GeneratedImage {
            // first_image guarantees a url
            url: image.url.unwrap_or_default(),
            revised_prompt: image.revised_prompt,
            size: request.size,
        })
    }

    /// Generate an image and render it; every outcome is a displayable string
    pub async fn generate(&self, prompt: &str, config: Option<&Configuration>) -> String {
        let config = match config {
            Some(config) if config.has_api_key() => config,
            _ => {
                error!("No configuration found for image generation");
                return NOT_CONFIGURED_MESSAGE.to_string();
            }
        };

        let invocation_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!(
            "Generating image [{invocation_id}] | Model: {} | Size: {} | Prompt: '{}'",
            config.model().as_str(),
            config.image_size().as_str(),
            prompt.chars().take(100).collect::<String>()
        );

        match self.try_generate(prompt, config).await {
            Ok(image) => {
                info!(
                    "Image generated [{invocation_id}] | Time: {:?}",
                    start_time.elapsed()
                );
                if let Some(revised) = &image.revised_prompt {
                    debug!("Revised prompt [{invocation_id}]: {revised}");
                }
                image.to_markup()
            }
            Err(GenerationError::EmptyPrompt) => {
                warn!("Empty prompt [{invocation_id}]");
                GenerationError::EmptyPrompt.user_message().to_string()
            }
            Err(e) => {
                error!(
                    "Image generation failed [{invocation_id}] after {:?}: {e}",
                    start_time.elapsed()
                );
                e.user_message().to_string()
            }
        }
    }
}
