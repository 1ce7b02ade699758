//! Highlighter configuration
//!
//! Stored in `~/.config/posthover/config.yaml`. Every field has a default,
//! so an empty or partial file is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::CssColor;
use crate::dom::Selector;

/// Which elements get wired and what colors they switch between
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Elements to wire at load time (e.g. ".post")
    #[serde(default = "default_selector")]
    pub selector: Selector,

    /// Background while the pointer is over a post
    #[serde(default = "default_hover_color")]
    pub hover_color: CssColor,

    /// Background after the pointer leaves a post
    #[serde(default = "default_neutral_color")]
    pub neutral_color: CssColor,

    /// Write the neutral color to every wired element at load time instead
    /// of leaving the page's own background until the first leave
    #[serde(default)]
    pub apply_neutral_on_load: bool,
}

fn default_selector() -> Selector {
    Selector::class("post")
}

fn default_hover_color() -> CssColor {
    CssColor::HOVER_DEFAULT
}

fn default_neutral_color() -> CssColor {
    CssColor::NEUTRAL_DEFAULT
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            hover_color: default_hover_color(),
            neutral_color: default_neutral_color(),
            apply_neutral_on_load: false,
        }
    }
}

impl HighlightConfig {
    /// Load config from the user config directory, or return defaults if
    /// not found or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path; errors are reported, not defaulted
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Parse config YAML; an empty document yields defaults
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}
