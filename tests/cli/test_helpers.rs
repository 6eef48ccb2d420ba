//! CLI test helpers
//!
//! Provides Arc<Services> fixtures matching the CLI execute()
//! signatures, plus catalog file builders for config-driven tests.

use bistro::core::config::Config;
use bistro::core::services::Services;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Create test services wrapped in Arc (matching CLI execute() signatures)
pub fn create_cli_test_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()).expect("default services should build"))
}

/// Write a TOML catalog file into a temp dir
///
/// # Arguments
/// * `entries` - Slice of (name, cuisine, rating, price) tuples
///
/// # Returns
/// The temp dir (keep alive during the test) and the catalog path
pub fn create_catalog_file(entries: &[(&str, &str, f32, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.toml");

    let mut contents = String::new();
    for (name, cuisine, rating, price) in entries {
        contents.push_str(&format!(
            "[[restaurants]]\nname = \"{name}\"\ncuisine = \"{cuisine}\"\n\
             location = \"Test Town\"\nrating = {rating}\nprice = \"{price}\"\n\
             description = \"A test entry.\"\n\n"
        ));
    }
    std::fs::write(&path, contents).expect("Failed to write catalog file");

    (dir, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cli_test_services() {
        let services = create_cli_test_services();
        assert_eq!(services.catalog.len(), 3);
        assert!(!services.selector.rules().is_empty());
    }

    #[test]
    fn test_create_catalog_file() {
        let (_dir, path) = create_catalog_file(&[("A", "Cuisine", 4.0, "$"), ("B", "Other", 3.5, "$$")]);
        let catalog = bistro::Catalog::from_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("A").is_some());
    }
}
