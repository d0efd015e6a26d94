// File: src/config.rs
// Purpose: Tag helper configuration from the [tags] table of rhtml.toml

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// CSS class added to fields that failed validation
pub const FIELD_WITH_ERROR: &str = "field-with-error";

static DEFAULT_CONFIG: Lazy<TagsConfig> = Lazy::new(TagsConfig::default);

/// Tag helper settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsConfig {
    /// Class appended to fields with a validation error
    #[serde(default = "default_error_class")]
    pub error_class: String,

    /// Parameter name used by `csrf_field`
    #[serde(default = "default_csrf_field")]
    pub csrf_field: String,

    /// Label of `submit_button` when none is given
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

/// Layout of rhtml.toml as far as the tag helpers care
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    tags: TagsConfig,
}

fn default_error_class() -> String {
    FIELD_WITH_ERROR.to_string()
}

fn default_csrf_field() -> String {
    "csrf_token".to_string()
}

fn default_submit_label() -> String {
    "Ok".to_string()
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            error_class: default_error_class(),
            csrf_field: default_csrf_field(),
            submit_label: default_submit_label(),
        }
    }
}

impl TagsConfig {
    /// Process-wide default configuration
    pub fn global() -> &'static TagsConfig {
        &DEFAULT_CONFIG
    }

    /// Parse the `[tags]` table from TOML text
    ///
    /// Other tables (`[server]`, `[routing]`, ...) are ignored.
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: ConfigFile = toml::from_str(content).context("Failed to parse tags config")?;
        Ok(file.tags)
    }

    /// Load configuration from rhtml.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            debug!("No config at {:?}, using tag helper defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!(?config, "Loaded tag helper config from {:?}", path);
        Ok(config)
    }

    /// Load configuration from default path (./rhtml.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rhtml.toml")
    }
}
