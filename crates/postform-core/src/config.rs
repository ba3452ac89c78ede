use serde::{Deserialize, Serialize};

use crate::error::PostFormError;

/// Host every draft image must be served from.
pub const DEFAULT_IMAGE_HOST: &str = "image.unsplash.com";
pub const DEFAULT_MIN_TITLE_LEN: usize = 2;
pub const DEFAULT_MIN_CONTENT_LEN: usize = 10;

/// Validation limits for the draft form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub allowed_image_host: String,
    pub min_title_len: usize,
    pub min_content_len: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            allowed_image_host: DEFAULT_IMAGE_HOST.into(),
            min_title_len: DEFAULT_MIN_TITLE_LEN,
            min_content_len: DEFAULT_MIN_CONTENT_LEN,
        }
    }
}

impl FormConfig {
    /// Build the config from variables captured at compile time.
    ///
    /// The browser has no process environment, so overrides are baked in
    /// with `option_env!`. Anything unset or unparsable keeps its default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            allowed_image_host: option_env!("POSTFORM_IMAGE_HOST")
                .map(str::trim)
                .filter(|host| !host.is_empty())
                .map(str::to_ascii_lowercase)
                .unwrap_or(defaults.allowed_image_host),
            min_title_len: parse_len(
                "POSTFORM_MIN_TITLE_LEN",
                option_env!("POSTFORM_MIN_TITLE_LEN"),
                defaults.min_title_len,
            ),
            min_content_len: parse_len(
                "POSTFORM_MIN_CONTENT_LEN",
                option_env!("POSTFORM_MIN_CONTENT_LEN"),
                defaults.min_content_len,
            ),
        }
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, PostFormError> {
        let config: FormConfig = toml::from_str(source)
            .map_err(|e| PostFormError::Config(format!("error parsing config: {}", e)))?;
        if config.allowed_image_host.trim().is_empty() {
            return Err(PostFormError::Config(
                "allowed_image_host must not be empty".into(),
            ));
        }
        Ok(config)
    }
}

fn parse_len(name: &str, raw: Option<&str>, default: usize) -> usize {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => default,
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("{} is not a length: {:?}, using {}", name, value, default);
            default
        }),
    }
}
