//! End-to-end flows: upload, list, download link.

use axum::http::StatusCode;
use uuid::Uuid;

use fileheap_core::types::id::UserId;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_upload_list_link_round_trip() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);

    let response = app
        .upload("/file?filetype=pdf", Some("T1"), "report.pdf", b"%PDF-1.7")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "report.pdf");
    assert_eq!(response.body["type"], "pdf");
    assert_eq!(response.body["owner_id"], u1.to_string());
    let id = response.body["id"].as_str().expect("generated id").to_string();
    assert!(app.objects.contains("report.pdf"));

    let response = app.get(&format!("/file?user={u1}"), Some("T1")).await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["name"], "report.pdf");

    let response = app.get(&format!("/file/{id}"), Some("T1")).await;
    assert_eq!(response.status, StatusCode::OK);
    let url = response.body.as_str().expect("plain URL string");
    assert!(url.contains("report.pdf"), "URL must target the upload key");
    assert!(url.contains("expires_in=600"));
}

#[tokio::test]
async fn test_repeated_links_reference_same_key_without_mutation() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);

    let response = app.upload("/file", Some("T1"), "data.bin", b"\x00\x01").await;
    let id = response.body["id"].as_str().expect("id").to_string();

    let first = app.get(&format!("/file/{id}"), Some("T1")).await;
    let second = app.get(&format!("/file/{id}"), Some("T1")).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert!(first.body.as_str().expect("url").contains("data.bin"));
    assert!(second.body.as_str().expect("url").contains("data.bin"));
    assert_eq!(app.files.record_count(), 1);
}

#[tokio::test]
async fn test_upload_without_filetype_yields_null_type() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);

    let response = app.upload("/file", Some("T1"), "notes.txt", b"hello").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["type"].is_null());
}

#[tokio::test]
async fn test_list_unmatched_owner_is_empty_array() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);

    let stranger = Uuid::new_v4();
    let response = app.get(&format!("/file?user={stranger}"), Some("T1")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn test_list_empty_filter_is_empty_array() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);

    let response = app.get("/file?user=", Some("T1")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn test_list_malformed_owner_id_is_rejected_whole() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);
    app.upload("/file", Some("T1"), "a.txt", b"a").await;

    let response = app
        .get(&format!("/file?user={u1},not-a-uuid"), Some("T1"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    // The valid entry must not have been partially processed.
    assert!(response.body.as_array().is_none());
}

#[tokio::test]
async fn test_list_missing_user_param() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);

    let response = app.get("/file", Some("T1")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_link_unknown_file_id_is_404() {
    let u1 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1)]);

    let response = app
        .get(&format!("/file/{}", Uuid::new_v4()), Some("T1"))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_multiple_owners() {
    let u1 = UserId::new();
    let u2 = UserId::new();
    let app = TestApp::with_tokens(&[("T1", u1), ("T2", u2)]);

    app.upload("/file", Some("T1"), "one.txt", b"1").await;
    app.upload("/file", Some("T2"), "two.txt", b"2").await;

    let response = app.get(&format!("/file?user={u1},{u2}"), Some("T1")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = TestApp::new();

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
