//! # Features
//!
//! - **settings**: typed settings schema and validation
//! - **image_gen**: prompt to image translation
//! - **tool**: host-facing tool entry point

pub mod image_gen;
pub mod settings;
pub mod tool;

pub use image_gen::{GeneratedImage, GenerationError, ImageBackend, ImageGenerator};
pub use settings::{describe, validate, Configuration, ConfigurationError, RawSettings};
pub use tool::{manifest, ImageTool, ToolDescriptor, ToolManifest, TOOL};
