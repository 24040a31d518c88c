//! # Feature: Image Tool
//!
//! Host-facing entry point. The host hands over the prompt and whatever
//! settings it currently has stored; the tool re-validates them on every
//! call and always answers with a string.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use log::{error, warn};
use serde::Serialize;

use crate::features::image_gen::{ImageGenerator, NOT_CONFIGURED_MESSAGE};
use crate::features::settings::{describe, validate, RawSettings, SettingsSchema};

/// Identity the host uses to register and route to the tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Output goes straight to the user without further processing by the assistant
    pub return_direct: bool,
}

pub const TOOL: ToolDescriptor = ToolDescriptor {
    name: "generate_image",
    description: "Useful to generate an image based on a text. The input is the user's requested image.",
    return_direct: true,
};

/// Everything the host needs to register the tool and render its settings form
#[derive(Debug, Clone, Serialize)]
pub struct ToolManifest {
    pub tool: &'static ToolDescriptor,
    pub settings: SettingsSchema,
}

impl ToolManifest {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn manifest() -> ToolManifest {
    ToolManifest {
        tool: &TOOL,
        settings: describe(),
    }
}

#[derive(Clone)]
pub struct ImageTool {
    generator: ImageGenerator,
}

impl ImageTool {
    pub fn new(generator: ImageGenerator) -> Self {
        ImageTool { generator }
    }

    pub fn descriptor(&self) -> &'static ToolDescriptor {
        &TOOL
    }

    pub fn settings_schema(&self) -> SettingsSchema {
        describe()
    }

    /// Run one invocation against the settings as currently stored
    pub async fn invoke(&self, prompt: &str, settings: &RawSettings) -> String {
        if settings.is_empty() {
            error!("No settings saved for {}", TOOL.name);
            return NOT_CONFIGURED_MESSAGE.to_string();
        }

        match validate(settings) {
            Ok(config) => self.generator.generate(prompt, Some(&config)).await,
            Err(e) => {
                warn!("Stored settings are invalid: {e}");
                format!("The image generation settings are invalid: {e}")
            }
        }
    }
}
