//! Process configuration loaded from the environment
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add OPENAI_API_KEY fallback for blank settings keys
//! - 1.0.0: Initial creation with log level, base URL and settings path

use anyhow::Result;

/// Default OpenAI REST base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default location of the YAML settings file
pub const DEFAULT_SETTINGS_PATH: &str = "meow_art.yaml";

#[derive(Clone)]
pub struct Config {
    pub log_level: String,
    pub openai_base_url: String,
    pub settings_path: String,
    pub openai_api_key: Option<String>,
}

impl Config {
    /// Build configuration from environment variables (call `dotenv()` first)
    pub fn from_env() -> Result<Self> {
        let openai_base_url = normalize_base_url(
            &std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        )?;

        Ok(Config {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            openai_base_url,
            settings_path: std::env::var("MEOW_ART_SETTINGS")
                .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
        })
    }
}

/// Require an http(s) scheme and strip trailing slashes
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/');
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(anyhow::anyhow!(
            "OPENAI_BASE_URL must be an http(s) URL: {}",
            raw
        ));
    }
    Ok(url.to_string())
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("log_level", &self.log_level)
            .field("openai_base_url", &self.openai_base_url)
            .field("settings_path", &self.settings_path)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
