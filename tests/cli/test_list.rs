//! Tests for the list CLI command

use crate::cli::test_helpers::{create_catalog_file, create_cli_test_services};
use bistro::cli::commands::list::{execute, ListArgs};
use bistro::cli::OutputFormat;
use bistro::core::config::Config;
use bistro::core::services::Services;
use std::sync::Arc;

#[tokio::test]
async fn test_list_human() {
    let services = create_cli_test_services();

    let args = ListArgs { names_only: false };
    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "List should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_list_json() {
    let services = create_cli_test_services();

    let args = ListArgs { names_only: false };
    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_names_only() {
    let services = create_cli_test_services();

    let args = ListArgs { names_only: true };
    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_catalog_from_file() {
    let (_dir, path) = create_catalog_file(&[
        ("Joe's Pizza", "Italian, Pizza", 4.5, "$$"),
        ("Sushi Nakazawa", "Japanese, Sushi", 4.8, "$$$$"),
        ("Shake Shack", "American, Burgers", 4.3, "$$"),
        ("Taco Cart", "Mexican", 4.1, "$"),
    ]);

    let mut config = Config::default();
    config.catalog.file = Some(path);
    let services = Arc::new(Services::new(config).unwrap());
    assert_eq!(services.catalog.len(), 4);

    let args = ListArgs { names_only: false };
    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}
