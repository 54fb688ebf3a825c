//! Auth rejection behavior: status codes and absence of side effects.

use axum::http::StatusCode;
use uuid::Uuid;

use fileheap_core::types::id::UserId;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_upload_with_invalid_token_is_400_and_writes_nothing() {
    let app = TestApp::new();

    let response = app
        .upload("/file", Some("bogus"), "report.pdf", b"%PDF-1.7")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid access token");
    assert!(app.objects.is_empty());
    assert_eq!(app.files.record_count(), 0);
}

#[tokio::test]
async fn test_list_with_invalid_token_is_401() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/file?user={}", Uuid::new_v4()), Some("bogus"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_link_with_invalid_token_is_401() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/file/{}", Uuid::new_v4()), Some("bogus"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_token_rejects_without_downstream_calls() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);

    let upload = app.upload("/file", None, "report.pdf", b"%PDF-1.7").await;
    let list = app.get(&format!("/file?user={u1}"), None).await;
    let link = app.get(&format!("/file/{}", Uuid::new_v4()), None).await;

    assert_eq!(upload.status, StatusCode::BAD_REQUEST);
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);
    assert_eq!(link.status, StatusCode::UNAUTHORIZED);

    // No validation call ever left the process, and nothing was written.
    assert_eq!(app.validator.calls(), 0);
    assert!(app.objects.is_empty());
    assert_eq!(app.files.record_count(), 0);
}

#[tokio::test]
async fn test_empty_token_header_is_not_anonymous() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/file?user={}", Uuid::new_v4()), Some(""))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.validator.calls(), 0);
}

#[tokio::test]
async fn test_rejected_upload_leaves_storage_untouched_even_with_other_users() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);

    app.upload("/file", Some("T1"), "kept.txt", b"kept").await;
    let response = app.upload("/file", Some("wrong"), "evil.txt", b"evil").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.objects.contains("kept.txt"));
    assert!(!app.objects.contains("evil.txt"));
    assert_eq!(app.files.record_count(), 1);
}
