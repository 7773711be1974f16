// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    build_checker, checker_config, results_page, serve_page, serve_response, FlakyStore,
    RecordingNotifier,
};
use examwatch::application::usecases::check_results::ResultChecker;
use examwatch::domain::models::check_outcome::CheckStatus;
use examwatch::engines::reqwest_engine::ReqwestEngine;
use std::sync::Arc;
use std::time::Duration;
use wiremock::ResponseTemplate;

const PHARM_D_ROW: &[&str] = &["1", "Pharm D", "Term 2", "01-01-2025"];
const PHARM_D_ID: &str = "Pharm D|Term 2|01-01-2025";

#[tokio::test]
async fn test_first_sighting_notifies_and_persists() {
    let server = serve_page(results_page(&[PHARM_D_ROW])).await;
    let store = Arc::new(FlakyStore::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = build_checker(&server, Some(store.clone()), notifier.clone())
        .run()
        .await;

    assert_eq!(outcome.status, CheckStatus::Success);
    assert_eq!(outcome.found_count, Some(1));
    assert_eq!(notifier.messages().len(), 1);
    assert!(store.members_now().contains(PHARM_D_ID));
}

#[tokio::test]
async fn test_already_notified_result_is_silent() {
    let server = serve_page(results_page(&[PHARM_D_ROW])).await;
    let store = Arc::new(FlakyStore::with_members([PHARM_D_ID]));
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = build_checker(&server, Some(store.clone()), notifier.clone())
        .run()
        .await;

    assert_eq!(outcome.status, CheckStatus::Success);
    assert_eq!(outcome.found_count, Some(0));
    assert!(notifier.messages().is_empty());
    assert_eq!(store.members_now().len(), 1);
}

#[tokio::test]
async fn test_repeated_runs_notify_once() {
    let server = serve_page(results_page(&[
        PHARM_D_ROW,
        &["2", "PHARM D (Lateral)", "Term 1", "02-01-2025"],
    ]))
    .await;
    let store = Arc::new(FlakyStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(&server, Some(store.clone()), notifier.clone());

    let first = checker.run().await;
    let second = checker.run().await;

    assert_eq!(first.found_count, Some(2));
    assert_eq!(second.found_count, Some(0));
    assert_eq!(notifier.messages().len(), 1);
    assert_eq!(store.members_now().len(), 2);
}

#[tokio::test]
async fn test_fetch_timeout_reports_error_and_alerts() {
    let server = serve_response(
        ResponseTemplate::new(200)
            .set_body_string(results_page(&[PHARM_D_ROW]))
            .set_delay(Duration::from_secs(3)),
    )
    .await;
    let store = Arc::new(FlakyStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = ResultChecker::new(
        checker_config(&server, Duration::from_millis(200)),
        Arc::new(ReqwestEngine),
        Some(store.clone()),
        notifier.clone(),
    );

    let outcome = checker.run().await;

    assert_eq!(outcome.status, CheckStatus::Error);
    assert_eq!(outcome.found_count, None);
    assert!(store.members_now().is_empty());

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, "[Exam Results] Website Check Failed");
    assert!(outcome
        .logs
        .iter()
        .any(|l| l.starts_with("Error fetching website:")));
}

#[tokio::test]
async fn test_server_error_status_is_a_fetch_failure() {
    let server = serve_response(ResponseTemplate::new(503)).await;
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = build_checker(&server, None, notifier.clone()).run().await;

    assert_eq!(outcome.status, CheckStatus::Error);
    assert_eq!(outcome.message, "Failed to fetch website");
    assert!(notifier.messages()[0].1.contains("503"));
}

#[tokio::test]
async fn test_unreachable_store_still_detects_match() {
    let server = serve_page(results_page(&[PHARM_D_ROW])).await;
    let store = Arc::new(FlakyStore::unreachable());
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = build_checker(&server, Some(store.clone()), notifier.clone())
        .run()
        .await;

    assert_eq!(outcome.status, CheckStatus::Success);
    assert_eq!(outcome.found_count, Some(1));
    assert_eq!(notifier.messages().len(), 1);
    assert!(outcome.logs.iter().any(|l| l
        == "Error reading from store: Connection error: connection refused. Proceeding without persisted state for this run."));
    assert!(outcome
        .logs
        .iter()
        .any(|l| l.starts_with(&format!("Error writing to store for '{}'", PHARM_D_ID))));
}

#[tokio::test]
async fn test_store_recovering_between_runs_keeps_growing() {
    let server = serve_page(results_page(&[PHARM_D_ROW])).await;
    let store = Arc::new(FlakyStore::default());
    store.set_fail_reads(true);
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(&server, Some(store.clone()), notifier.clone());

    let degraded = checker.run().await;
    store.set_fail_reads(false);
    let recovered = checker.run().await;

    assert_eq!(degraded.found_count, Some(1));
    assert_eq!(recovered.found_count, Some(0));
    assert!(store.members_now().contains(PHARM_D_ID));
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_short_rows_never_reach_the_notification() {
    let server = serve_page(results_page(&[
        &["1", "Pharm D", "Term 9"],
        &["Pharm D", "Pharm D", "Pharm D"],
        &["2", "MBBS", "Term 1", "03-01-2025"],
    ]))
    .await;
    let store = Arc::new(FlakyStore::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = build_checker(&server, Some(store.clone()), notifier.clone())
        .run()
        .await;

    assert_eq!(outcome.found_count, Some(0));
    assert!(notifier.messages().is_empty());
    assert!(store.members_now().is_empty());
    assert!(outcome
        .logs
        .contains(&"Found 3 rows in the results table.".to_string()));
}

#[tokio::test]
async fn test_matching_is_case_insensitive_substring() {
    let server = serve_page(results_page(&[
        &["1", "PHARM D (Lateral)", "Term 1", "01-02-2025"],
        &["2", "Pharmacy", "Term 1", "01-02-2025"],
        &["3", "B.Pharm", "Term 1", "01-02-2025"],
    ]))
    .await;
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = build_checker(&server, None, notifier.clone()).run().await;

    assert_eq!(outcome.found_count, Some(1));
    let body = &notifier.messages()[0].1;
    assert!(body.contains("Course Name: PHARM D (Lateral)"));
    assert!(!body.contains("Course Name: Pharmacy"));
    assert!(!body.contains("Course Name: B.Pharm"));
}

#[tokio::test]
async fn test_duplicate_rows_in_page_collapse() {
    let server = serve_page(results_page(&[PHARM_D_ROW, PHARM_D_ROW])).await;
    let store = Arc::new(FlakyStore::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = build_checker(&server, Some(store.clone()), notifier.clone())
        .run()
        .await;

    assert_eq!(outcome.found_count, Some(1));
    assert_eq!(notifier.messages()[0].1.matches("Course Name:").count(), 1);
}

#[tokio::test]
async fn test_page_without_results_table() {
    let server = serve_page("<html><body><div id=\"app\"></div></body></html>".to_string()).await;
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = build_checker(&server, None, notifier.clone()).run().await;

    assert_eq!(outcome.status, CheckStatus::Success);
    assert_eq!(outcome.message, "No new results found.");
    assert!(notifier.messages().is_empty());
}
