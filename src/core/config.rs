//! Configuration management for bistro.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{BistroError, Result};
use crate::core::selector::{Rule, Selector};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Presentation pacing and layout configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresentationConfig {
    /// Per-character delay for narrated output, in milliseconds
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Pause for Enter between walkthrough sections
    #[serde(default = "default_pause")]
    pub pause: bool,

    /// Wrap width for rendered descriptions, in characters
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

/// Catalog source configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Optional TOML catalog file; the built-in sample set when absent
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Query routing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoutingConfig {
    /// Ordered rule list, evaluated first-match-wins
    #[serde(default = "default_rules")]
    pub rules: Vec<Rule>,

    /// Record selected when no rule matches
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Headline for the fallback record
    #[serde(default = "default_fallback_intro")]
    pub fallback_intro: String,
}

// Default value functions
fn default_typing_delay_ms() -> u64 {
    20
}

fn default_pause() -> bool {
    true
}

fn default_wrap_width() -> usize {
    56
}

fn default_rules() -> Vec<Rule> {
    Selector::default_rules()
}

fn default_fallback() -> String {
    Selector::default_fallback().0
}

fn default_fallback_intro() -> String {
    Selector::default_fallback().1
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            pause: default_pause(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            fallback: default_fallback(),
            fallback_intro: default_fallback_intro(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BistroError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File location: `BISTRO_CONFIG` env var, else `./bistro.toml` if
    /// present, else defaults only.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("BISTRO_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("bistro.toml").exists() {
            Self::from_file("bistro.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(delay) = env::var("BISTRO_TYPING_DELAY_MS") {
            if let Ok(ms) = delay.parse() {
                self.presentation.typing_delay_ms = ms;
            }
        }
        if let Ok(pause) = env::var("BISTRO_PAUSE") {
            if let Ok(p) = pause.parse() {
                self.presentation.pause = p;
            }
        }
        if let Ok(width) = env::var("BISTRO_WRAP_WIDTH") {
            if let Ok(w) = width.parse() {
                self.presentation.wrap_width = w;
            }
        }
        if let Ok(file) = env::var("BISTRO_CATALOG_FILE") {
            self.catalog.file = Some(PathBuf::from(file));
        }
    }

    /// Validate configuration values
    ///
    /// Rule targets are validated later against the loaded catalog; this
    /// checks the values that stand on their own.
    pub fn validate(&self) -> Result<()> {
        if self.presentation.wrap_width == 0 {
            return Err(BistroError::ConfigError(
                "Wrap width must be non-zero".to_string(),
            ));
        }

        for rule in &self.routing.rules {
            if rule.keyword.trim().is_empty() {
                return Err(BistroError::ConfigError(format!(
                    "Routing rule for '{}' has an empty keyword",
                    rule.target
                )));
            }
        }

        if self.routing.fallback.trim().is_empty() {
            return Err(BistroError::ConfigError(
                "Routing fallback must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Typing delay: {} ms", self.presentation.typing_delay_ms);
        tracing::info!("  Pause between sections: {}", self.presentation.pause);
        tracing::info!("  Wrap width: {} chars", self.presentation.wrap_width);
        match &self.catalog.file {
            Some(path) => tracing::info!("  Catalog file: {:?}", path),
            None => tracing::info!("  Catalog: built-in sample set"),
        }
        tracing::info!("  Routing rules: {}", self.routing.rules.len());
        tracing::info!("  Fallback: {}", self.routing.fallback);
    }
}
