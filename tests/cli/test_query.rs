//! Tests for the query CLI command
//!
//! The command cannot fail on query content (routing is total), so
//! these check both output formats and odd inputs run clean.

use crate::cli::test_helpers::create_cli_test_services;
use bistro::cli::commands::query::{execute, QueryArgs};
use bistro::cli::OutputFormat;

#[tokio::test]
async fn test_query_human() {
    let services = create_cli_test_services();

    let args = QueryArgs {
        text: "Where can I find good pizza in New York?".to_string(),
        name_only: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Query should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_query_json() {
    let services = create_cli_test_services();

    let args = QueryArgs {
        text: "I want fancy Japanese food".to_string(),
        name_only: false,
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "JSON query should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_query_empty_string() {
    let services = create_cli_test_services();

    let args = QueryArgs {
        text: String::new(),
        name_only: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Empty query should hit the fallback, not fail");
}

#[tokio::test]
async fn test_query_name_only() {
    let services = create_cli_test_services();

    let args = QueryArgs {
        text: "pizza".to_string(),
        name_only: true,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_query_adversarial_content() {
    let services = create_cli_test_services();

    for text in ["\0\0", "🍕", "{\"json\": true}", "\n\n\n"] {
        let args = QueryArgs {
            text: text.to_string(),
            name_only: false,
        };
        let result = execute(args, &services, OutputFormat::Human).await;
        assert!(result.is_ok(), "Query {text:?} should succeed");
    }
}
