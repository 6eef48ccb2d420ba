//! Tests for the demo CLI command
//!
//! The walkthrough runs against a recording presenter, so these
//! assert on the transcript instead of terminal output or timing.

use crate::cli::test_helpers::create_cli_test_services;
use bistro::cli::commands::demo::{execute, DemoArgs, SAMPLE_QUERIES};
use bistro::cli::presenter::RecordingPresenter;

#[tokio::test]
async fn test_demo_runs_to_completion() {
    let services = create_cli_test_services();
    let presenter = RecordingPresenter::new();

    let result = execute(DemoArgs { fast: true }, &services, &presenter).await;
    assert!(result.is_ok(), "Demo should succeed: {:?}", result.err());
    assert!(!presenter.announcements().is_empty());
}

#[tokio::test]
async fn test_demo_narrates_every_sample_query() {
    let services = create_cli_test_services();
    let presenter = RecordingPresenter::new();

    execute(DemoArgs { fast: true }, &services, &presenter)
        .await
        .unwrap();

    let transcript = presenter.transcript();
    for query in SAMPLE_QUERIES {
        assert!(transcript.contains(query), "transcript missing {query:?}");
    }
}

#[tokio::test]
async fn test_demo_shows_routed_recommendations() {
    let services = create_cli_test_services();
    let presenter = RecordingPresenter::new();

    execute(DemoArgs { fast: true }, &services, &presenter)
        .await
        .unwrap();

    // The sample queries resolve to all three records in order.
    let transcript = presenter.transcript();
    assert!(transcript.contains("Joe's Pizza"));
    assert!(transcript.contains("Sushi Nakazawa"));
    assert!(transcript.contains("Shake Shack"));
    assert!(transcript.contains("4.5"));
    assert!(transcript.contains("4.8"));
    assert!(transcript.contains("4.3"));
}

#[tokio::test]
async fn test_demo_lists_catalog_in_load_step() {
    let services = create_cli_test_services();
    let presenter = RecordingPresenter::new();

    execute(DemoArgs { fast: true }, &services, &presenter)
        .await
        .unwrap();

    let transcript = presenter.transcript();
    for restaurant in services.catalog.iter() {
        assert!(
            transcript.contains(&restaurant.name),
            "catalog step missing {}",
            restaurant.name
        );
    }
}

#[tokio::test]
async fn test_demo_pauses_between_sections() {
    let services = create_cli_test_services();
    let presenter = RecordingPresenter::new();

    execute(DemoArgs { fast: true }, &services, &presenter)
        .await
        .unwrap();

    // Section pauses plus the per-query pauses between sample queries.
    assert!(presenter.pause_count() >= 4);
}

#[tokio::test]
async fn test_demo_explains_fallback() {
    let services = create_cli_test_services();
    let presenter = RecordingPresenter::new();

    execute(DemoArgs { fast: true }, &services, &presenter)
        .await
        .unwrap();

    let transcript = presenter.transcript();
    assert!(transcript.contains("fallback"));
}
