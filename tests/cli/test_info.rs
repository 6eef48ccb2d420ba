//! Tests for the info and config CLI commands

use crate::cli::test_helpers::create_cli_test_services;
use bistro::cli::commands::config::{execute as config_execute, ConfigArgs};
use bistro::cli::commands::info::{execute as info_execute, InfoArgs};
use bistro::cli::OutputFormat;

#[tokio::test]
async fn test_info_human() {
    let services = create_cli_test_services();

    let args = InfoArgs { detailed: false };
    let result = info_execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Info should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_info_detailed_json() {
    let services = create_cli_test_services();

    let args = InfoArgs { detailed: true };
    let result = info_execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_config_human() {
    let services = create_cli_test_services();

    let result = config_execute(ConfigArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Config should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_config_json() {
    let services = create_cli_test_services();

    let result = config_execute(ConfigArgs {}, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}
