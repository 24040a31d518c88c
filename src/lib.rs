// Core layer - process configuration
pub mod core;

// Features layer - settings, image generation and the tool surface
pub mod features;

pub use core::Config;

pub use features::{
    // Settings
    describe, validate, Configuration, ConfigurationError, RawSettings,
    // Image generation
    GeneratedImage, GenerationError, ImageBackend, ImageGenerator,
    // Tool
    ImageTool, ToolDescriptor, TOOL,
};
