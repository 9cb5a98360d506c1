use axum::http::{Method, StatusCode};

use crate::fixtures::{send, TestFixture};

#[tokio::test]
async fn test_rdp_config_download() {
    let fixture = TestFixture::new();
    let account = fixture.insert_test_account("alice");
    let app = fixture.create_test_router();
    let uri = format!("/api/rdp-config/{}", account.id);

    let (status, headers, body) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/x-rdp")
    );
    let disposition = headers
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"alice_"));
    assert!(disposition.ends_with(".rdp\""));

    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("full address:s:gateway.test:3391"));
    assert!(text.contains("prompt for credentials:i:1"));
    assert!(text.contains("username:s:alice"));

    let (_, second, _) = send(&app, Method::GET, &uri, None).await;
    assert_ne!(
        second.get("content-disposition").and_then(|v| v.to_str().ok()),
        Some(disposition.as_str())
    );
    assert_eq!(fixture.audit_count(), 1);
}

#[tokio::test]
async fn test_rdp_config_for_unknown_user() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, _, body) = send(&app, Method::GET, "/api/rdp-config/5", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_rdp_config_with_non_numeric_id() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, headers, body) = send(&app, Method::GET, "/api/rdp-config/alice", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers["content-type"], "application/json");
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "validation");
}
