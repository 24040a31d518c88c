//! # Feature: Settings
//!
//! Typed settings schema for the image generation tool with model/size
//! compatibility checks applied before a configuration can be saved.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: DALL-E 2 support (smaller sizes, no quality/style)
//! - 1.0.0: Initial release with DALL-E 3 settings

pub mod schema;
pub mod validation;

pub use schema::{describe, FieldDescriptor, ImageSize, Model, Quality, SettingsSchema, Style};
pub use validation::{validate, Configuration, ConfigurationError, RawSettings};
