//! Setting enums and the declarative settings descriptor
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add 512x512 and 256x256 sizes for DALL-E 2
//! - 1.0.0: Initial release with model, size, quality and style

use serde::{Deserialize, Serialize};

use super::validation::RawSettings;

/// Image generation model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Model {
    #[serde(rename = "dall-e-3")]
    Dalle3,
    #[serde(rename = "dall-e-2")]
    Dalle2,
}

impl Model {
    pub const ALL: [Model; 2] = [Model::Dalle3, Model::Dalle2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Dalle3 => "dall-e-3",
            Model::Dalle2 => "dall-e-2",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// Sizes this model accepts
    pub fn supported_sizes(&self) -> &'static [ImageSize] {
        match self {
            Model::Dalle3 => &[ImageSize::Square, ImageSize::Landscape, ImageSize::Portrait],
            Model::Dalle2 => &[ImageSize::Square, ImageSize::Medium, ImageSize::Small],
        }
    }

    pub fn supports(&self, size: ImageSize) -> bool {
        self.supported_sizes().contains(&size)
    }

    /// Whether `quality` and `style` are part of this model's parameter set
    pub fn supports_quality_and_style(&self) -> bool {
        matches!(self, Model::Dalle3)
    }
}

/// Output image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1024x1024")]
    Square,
    #[serde(rename = "1792x1024")]
    Landscape,
    #[serde(rename = "1024x1792")]
    Portrait,
    #[serde(rename = "512x512")]
    Medium,
    #[serde(rename = "256x256")]
    Small,
}

impl ImageSize {
    pub const ALL: [ImageSize; 5] = [
        ImageSize::Square,
        ImageSize::Landscape,
        ImageSize::Portrait,
        ImageSize::Medium,
        ImageSize::Small,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Square => "1024x1024",
            ImageSize::Landscape => "1792x1024",
            ImageSize::Portrait => "1024x1792",
            ImageSize::Medium => "512x512",
            ImageSize::Small => "256x256",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == s)
    }

    /// (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            ImageSize::Square => (1024, 1024),
            ImageSize::Landscape => (1792, 1024),
            ImageSize::Portrait => (1024, 1792),
            ImageSize::Medium => (512, 512),
            ImageSize::Small => (256, 256),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Hd,
    Standard,
}

impl Quality {
    pub const ALL: [Quality; 2] = [Quality::Hd, Quality::Standard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Hd => "hd",
            Quality::Standard => "standard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Natural,
    Vivid,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Natural, Style::Vivid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Natural => "natural",
            Style::Vivid => "vivid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

/// Settings keys, as stored in the host's key/value mapping
pub const API_KEY: &str = "api_key";
pub const MODEL: &str = "model";
pub const IMAGE_SIZE: &str = "image_size";
pub const QUALITY: &str = "quality";
pub const STYLE: &str = "style";

/// Description of a single user-editable setting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Empty for free-text fields
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<&'static str>,
    pub default: &'static str,
    /// Secret values are masked by settings forms
    pub secret: bool,
}

/// Declarative schema handed to the host for rendering a settings form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsSchema {
    pub title: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl SettingsSchema {
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// The declared defaults as a settings candidate
    pub fn defaults(&self) -> RawSettings {
        let default_of = |key: &str| self.field(key).map(|f| f.default.to_string());
        RawSettings {
            api_key: default_of(API_KEY),
            model: default_of(MODEL),
            image_size: default_of(IMAGE_SIZE),
            quality: default_of(QUALITY),
            style: default_of(STYLE),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub const DEFAULT_MODEL: Model = Model::Dalle3;
pub const DEFAULT_IMAGE_SIZE: ImageSize = ImageSize::Square;
pub const DEFAULT_QUALITY: Quality = Quality::Hd;
pub const DEFAULT_STYLE: Style = Style::Natural;

/// Describe every recognized setting
pub fn describe() -> SettingsSchema {
    SettingsSchema {
        title: "Settings",
        fields: vec![
            FieldDescriptor {
                key: API_KEY,
                title: "API Key",
                description: "The API key for OpenAI's image generation API.",
                allowed_values: vec![],
                default: "",
                secret: true,
            },
            FieldDescriptor {
                key: IMAGE_SIZE,
                title: "Image size",
                description: "The size for the image to generate",
                allowed_values: ImageSize::ALL.iter().map(|s| s.as_str()).collect(),
                default: DEFAULT_IMAGE_SIZE.as_str(),
                secret: false,
            },
            FieldDescriptor {
                key: QUALITY,
                title: "Image quality",
                description: "The quality for the image to generate",
                allowed_values: Quality::ALL.iter().map(|q| q.as_str()).collect(),
                default: DEFAULT_QUALITY.as_str(),
                secret: false,
            },
            FieldDescriptor {
                key: STYLE,
                title: "Image style",
                description: "The style for the image to generate",
                allowed_values: Style::ALL.iter().map(|s| s.as_str()).collect(),
                default: DEFAULT_STYLE.as_str(),
                secret: false,
            },
            FieldDescriptor {
                key: MODEL,
                title: "Model",
                description: "The model to use for the image to generate",
                allowed_values: Model::ALL.iter().map(|m| m.as_str()).collect(),
                default: DEFAULT_MODEL.as_str(),
                secret: false,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::settings::validate;

    #[test]
    fn test_parse_literals() {
        assert_eq!(Model::parse("dall-e-2"), Some(Model::Dalle2));
        assert_eq!(ImageSize::parse("1792x1024"), Some(ImageSize::Landscape));
        assert_eq!(Quality::parse("standard"), Some(Quality::Standard));
        assert_eq!(Style::parse("vivid"), Some(Style::Vivid));
        assert_eq!(Model::parse("dalle3"), None);
        assert_eq!(ImageSize::parse("2048x2048"), None);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Model::parse(" dall-e-3 "), None);
        assert_eq!(ImageSize::parse("1024x1024\n"), None);
        assert_eq!(Quality::parse("HD"), None);
        assert_eq!(Style::parse(" natural"), None);
    }

    #[test]
    fn test_serde_uses_wire_literals() {
        assert_eq!(
            serde_json::to_string(&ImageSize::Portrait).unwrap(),
            "\"1024x1792\""
        );
        assert_eq!(serde_json::to_string(&Model::Dalle3).unwrap(), "\"dall-e-3\"");
        assert_eq!(serde_json::to_string(&Quality::Hd).unwrap(), "\"hd\"");
    }

    #[test]
    fn test_every_size_supported_by_some_model() {
        for size in ImageSize::ALL {
            assert!(Model::ALL.iter().any(|m| m.supports(size)), "{size:?}");
        }
    }

    #[test]
    fn test_describe_lists_all_fields() {
        let schema = describe();
        for key in [API_KEY, MODEL, IMAGE_SIZE, QUALITY, STYLE] {
            assert!(schema.field(key).is_some(), "missing {key}");
        }
        assert!(schema.field(API_KEY).unwrap().secret);
        assert_eq!(schema.field(IMAGE_SIZE).unwrap().allowed_values.len(), 5);
    }

    #[test]
    fn test_declared_defaults_are_allowed_values() {
        for field in describe().fields {
            if !field.allowed_values.is_empty() {
                assert!(field.allowed_values.contains(&field.default), "{}", field.key);
            }
        }
    }

    #[test]
    fn test_declared_defaults_validate() {
        let config = validate(&describe().defaults()).unwrap();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.image_size(), DEFAULT_IMAGE_SIZE);
        assert_eq!(config.api_key(), "");
    }

    #[test]
    fn test_schema_json() {
        let json = describe().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fields"][0]["key"], "api_key");
        assert!(value["fields"][0].get("allowed_values").is_none());
        assert_eq!(value["fields"][4]["default"], "dall-e-3");
    }
}
