//! Error types and error handling for bistro.
//!
//! This module defines the error types used throughout the
//! application. Output formatting of errors is handled in the
//! CLI adapter.

use thiserror::Error;

/// Result type alias for bistro operations
pub type Result<T> = std::result::Result<T, BistroError>;

/// Main error type for bistro
#[derive(Error, Debug)]
pub enum BistroError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Unknown restaurant '{name}' (available: {})", available.join(", "))]
    UnknownRestaurant {
        name: String,
        available: Vec<String>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl BistroError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, BistroError::UnknownRestaurant { .. })
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            BistroError::ConfigError(_) | BistroError::CatalogError(_)
        )
    }
}
