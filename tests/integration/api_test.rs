// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{build_checker, results_page, serve_page, serve_response, RecordingNotifier};
use axum_test::TestServer;
use examwatch::presentation::routes;
use serde_json::Value;
use std::sync::Arc;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_check_results_endpoint_returns_outcome_json() {
    let page = serve_page(results_page(&[&["1", "Pharm D", "Term 2", "01-01-2025"]])).await;
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = Arc::new(build_checker(&page, None, notifier.clone()));
    let server = TestServer::new(routes::routes(checker)).unwrap();

    let response = server.get("/api/check_results").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "New results found and notified.");
    assert_eq!(body["found_count"], 1);
    assert!(body["logs"].as_array().unwrap().len() > 1);
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_fetch_failure_is_still_http_ok() {
    let page = serve_response(ResponseTemplate::new(500)).await;
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = Arc::new(build_checker(&page, None, notifier));
    let server = TestServer::new(routes::routes(checker)).unwrap();

    let response = server.get("/api/check_results").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Failed to fetch website");
    assert!(body.get("found_count").is_none());
}

#[tokio::test]
async fn test_health_and_version() {
    let page = serve_page(results_page(&[])).await;
    let checker = Arc::new(build_checker(
        &page,
        None,
        Arc::new(RecordingNotifier::default()),
    ));
    let server = TestServer::new(routes::routes(checker)).unwrap();

    server.get("/health").await.assert_text("OK");
    server
        .get("/v1/version")
        .await
        .assert_text(env!("CARGO_PKG_VERSION"));
}
