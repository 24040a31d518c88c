//! # Feature: Image Generation
//!
//! DALL-E powered image creation from a free-text prompt, rendered as an
//! inline `<img>` fragment for the chat surface.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod backend;
pub mod error;
pub mod generator;
pub mod render;

pub use backend::{GenerationRequest, ImageBackend, ImageResponse, OpenAiImageClient};
pub use error::{GenerationError, NOT_CONFIGURED_MESSAGE};
pub use generator::{GeneratedImage, ImageGenerator};
