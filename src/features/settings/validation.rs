//! Raw settings input and validated configuration
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Reject unknown enum literals instead of falling back to defaults
//! - 1.0.0: Initial release with model/size compatibility check

use anyhow::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::schema::{
    self, ImageSize, Model, Quality, Style, DEFAULT_IMAGE_SIZE, DEFAULT_MODEL, DEFAULT_QUALITY,
    DEFAULT_STYLE,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown value '{value}' for {field}; expected one of: {}", .allowed.join(", "))]
    UnknownValue {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error(
        "image size {} is not accepted by {}; choose {}",
        .size.as_str(),
        .model.as_str(),
        accepted_range(.model)
    )]
    IncompatibleSize { model: Model, size: ImageSize },
}

fn accepted_range(model: &Model) -> &'static str {
    match model {
        Model::Dalle2 => "1024x1024 or smaller",
        Model::Dalle3 => "1024x1024 or more",
    }
}

/// Settings exactly as the user entered them; every field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl RawSettings {
    /// Build from a host key/value mapping; unrecognized keys are ignored
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let mut settings = Self::default();
        for (key, value) in map {
            settings.set(key, value.clone());
        }
        settings
    }

    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            schema::API_KEY => Some(&mut self.api_key),
            schema::MODEL => Some(&mut self.model),
            schema::IMAGE_SIZE => Some(&mut self.image_size),
            schema::QUALITY => Some(&mut self.quality),
            schema::STYLE => Some(&mut self.style),
            _ => None,
        }
    }

    /// Store a value by settings key; returns false for unrecognized keys
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match self.slot(key) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            schema::API_KEY => self.api_key.as_deref(),
            schema::MODEL => self.model.as_deref(),
            schema::IMAGE_SIZE => self.image_size.as_deref(),
            schema::QUALITY => self.quality.as_deref(),
            schema::STYLE => self.style.as_deref(),
            _ => None,
        }
    }

    /// Load from a YAML file; a missing file means "not yet configured"
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: RawSettings = serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid settings file {}: {}", path.display(), e))?;
        Ok(settings)
    }

    /// Like `from_yaml_file`, but an unreadable or corrupt file starts over from empty
    pub fn from_yaml_file_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::from_yaml_file(path).unwrap_or_else(|e| {
            warn!("Ignoring settings from {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// True when nothing has been saved yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Validated, immutable plugin configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    api_key: String,
    model: Model,
    image_size: ImageSize,
    quality: Quality,
    style: Style,
}

impl Configuration {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// A blank key is valid to save but cannot authorize a request
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("api_key", &if self.has_api_key() { "[redacted]" } else { "" })
            .field("model", &self.model)
            .field("image_size", &self.image_size)
            .field("quality", &self.quality)
            .field("style", &self.style)
            .finish()
    }
}

fn resolve<T>(
    field: &'static str,
    raw: Option<&str>,
    default: T,
    parse: fn(&str) -> Option<T>,
    all: &[T],
    as_str: fn(&T) -> &'static str,
) -> Result<T, ConfigurationError> {
    match raw {
        None => Ok(default),
        Some(value) => parse(value).ok_or_else(|| ConfigurationError::UnknownValue {
            field,
            value: value.to_string(),
            allowed: all.iter().map(as_str).collect(),
        }),
    }
}

/// Resolve and check a settings candidate before it is saved
pub fn validate(candidate: &RawSettings) -> Result<Configuration, ConfigurationError> {
    let model = resolve(
        schema::MODEL,
        candidate.model.as_deref(),
        DEFAULT_MODEL,
        Model::parse,
        &Model::ALL,
        Model::as_str,
    )?;
    let image_size = resolve(
        schema::IMAGE_SIZE,
        candidate.image_size.as_deref(),
        DEFAULT_IMAGE_SIZE,
        ImageSize::parse,
        &ImageSize::ALL,
        ImageSize::as_str,
    )?;
    let quality = resolve(
        schema::QUALITY,
        candidate.quality.as_deref(),
        DEFAULT_QUALITY,
        Quality::parse,
        &Quality::ALL,
        Quality::as_str,
    )?;
    let style = resolve(
        schema::STYLE,
        candidate.style.as_deref(),
        DEFAULT_STYLE,
        Style::parse,
        &Style::ALL,
        Style::as_str,
    )?;

    if !model.supports(image_size) {
        return Err(ConfigurationError::IncompatibleSize {
            model,
            size: image_size,
        });
    }

    Ok(Configuration {
        api_key: candidate.api_key.clone().unwrap_or_default(),
        model,
        image_size,
        quality,
        style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(model: &str, size: &str) -> RawSettings {
        RawSettings {
            api_key: Some("sk-test".to_string()),
            model: Some(model.to_string()),
            image_size: Some(size.to_string()),
            quality: Some("hd".to_string()),
            style: Some("vivid".to_string()),
        }
    }

    #[test]
    fn test_dalle2_size_compatibility() {
        for size in ImageSize::ALL {
            let result = validate(&candidate("dall-e-2", size.as_str()));
            let accepted = matches!(
                size,
                ImageSize::Square | ImageSize::Medium | ImageSize::Small
            );
            if accepted {
                assert!(result.is_ok(), "{} should be accepted", size.as_str());
            } else {
                let err = result.unwrap_err();
                assert!(err.to_string().contains("1024x1024 or smaller"), "{err}");
                assert!(err.to_string().contains(size.as_str()));
            }
        }
    }

    #[test]
    fn test_dalle3_size_compatibility() {
        for size in ImageSize::ALL {
            let result = validate(&candidate("dall-e-3", size.as_str()));
            let accepted = matches!(
                size,
                ImageSize::Square | ImageSize::Landscape | ImageSize::Portrait
            );
            if accepted {
                assert!(result.is_ok(), "{} should be accepted", size.as_str());
            } else {
                let err = result.unwrap_err();
                assert!(err.to_string().contains("1024x1024 or more"), "{err}");
                assert_eq!(
                    err,
                    ConfigurationError::IncompatibleSize {
                        model: Model::Dalle3,
                        size
                    }
                );
            }
        }
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let mut raw = candidate("dall-e-3", "1024x1024");
        raw.style = Some("cartoon".to_string());

        let err = validate(&raw).unwrap_err();
        match &err {
            ConfigurationError::UnknownValue { field, value, allowed } => {
                assert_eq!(*field, "style");
                assert_eq!(value, "cartoon");
                assert_eq!(allowed, &vec!["natural", "vivid"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("natural, vivid"));
    }

    #[test]
    fn test_minimal_candidate_uses_defaults() {
        let raw = RawSettings {
            api_key: Some("sk-test".to_string()),
            model: Some("dall-e-2".to_string()),
            image_size: Some("512x512".to_string()),
            ..Default::default()
        };

        let config = validate(&raw).unwrap();
        assert_eq!(config.model(), Model::Dalle2);
        assert_eq!(config.image_size(), ImageSize::Medium);
        assert_eq!(config.quality(), Quality::Hd);
        assert_eq!(config.style(), Style::Natural);
    }

    #[test]
    fn test_blank_api_key_is_valid_but_unusable() {
        let config = validate(&RawSettings::default()).unwrap();
        assert_eq!(config.api_key(), "");
        assert!(!config.has_api_key());

        let mut raw = candidate("dall-e-3", "1024x1024");
        raw.api_key = Some("   ".to_string());
        assert!(!validate(&raw).unwrap().has_api_key());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = validate(&candidate("dall-e-3", "1024x1024")).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-test"));
    }

    #[test]
    fn test_from_map_ignores_unknown_keys() {
        let mut map = HashMap::new();
        map.insert("api_key".to_string(), "sk-test".to_string());
        map.insert("image_size".to_string(), "1792x1024".to_string());
        map.insert("color".to_string(), "blue".to_string());

        let raw = RawSettings::from_map(&map);
        assert_eq!(raw.api_key.as_deref(), Some("sk-test"));
        assert_eq!(raw.image_size.as_deref(), Some("1792x1024"));
        assert!(raw.model.is_none());
        assert!(RawSettings::from_map(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_padded_literal_from_map_is_rejected() {
        let mut map = HashMap::new();
        map.insert("model".to_string(), " dall-e-3 ".to_string());

        let err = validate(&RawSettings::from_map(&map)).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnknownValue { field: "model", .. }
        ));
    }

    #[test]
    fn test_set_and_get_by_key() {
        let mut raw = RawSettings::default();
        assert!(raw.set("quality", "standard".to_string()));
        assert!(!raw.set("color", "blue".to_string()));

        assert_eq!(raw.get("quality"), Some("standard"));
        assert_eq!(raw.get("style"), None);
        assert_eq!(raw.get("color"), None);
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = r#"
api_key: sk-test
model: dall-e-2
image_size: 256x256
"#;
        let raw: RawSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(raw.model.as_deref(), Some("dall-e-2"));
        assert!(raw.quality.is_none());

        let written = raw.to_yaml().unwrap();
        assert!(!written.contains("quality"));
        let reread: RawSettings = serde_yaml::from_str(&written).unwrap();
        assert_eq!(reread, raw);
    }

    #[test]
    fn test_corrupt_settings_file() {
        let path = std::env::temp_dir().join(format!("meow_art_{}.yaml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "model: [dall-e-3\n  image_size: {").unwrap();

        assert!(RawSettings::from_yaml_file(&path).is_err());
        assert!(RawSettings::from_yaml_file_or_default(&path).is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_settings_file_is_empty() {
        let raw = RawSettings::from_yaml_file("/nonexistent/meow_art.yaml").unwrap();
        assert!(raw.is_empty());
    }
}
