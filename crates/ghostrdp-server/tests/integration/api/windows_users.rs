use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::fixtures::{send_json, TestFixture};

#[tokio::test]
async fn test_windows_users_have_their_own_namespace() {
    let fixture = TestFixture::new();
    fixture.insert_test_account("alice");
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/windows-users",
        Some(json!({"username": "alice"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["enabled"], true);
    assert!(fixture.last_audit_message().starts_with("Windows user created: alice"));
}

#[tokio::test]
async fn test_duplicate_windows_user_is_a_conflict() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    send_json(&app, Method::POST, "/api/windows-users", Some(json!({"username": "svc"}))).await;
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/windows-users",
        Some(json!({"username": "svc"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "conflict");
    let (_, list) = send_json(&app, Method::GET, "/api/windows-users", None).await;
    assert_eq!(list["windows_users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_and_delete_windows_user() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();
    let (_, created) = send_json(
        &app,
        Method::POST,
        "/api/windows-users",
        Some(json!({"username": "svc"})),
    )
    .await;
    let uri = format!("/api/windows-users/{}", created["id"]);

    let (status, body) =
        send_json(&app, Method::PUT, &uri, Some(json!({"username": "svc-rdp"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "svc-rdp");

    let (status, body) = send_json(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Windows user svc-rdp deleted");

    let (status, _) = send_json(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(fixture.audit_count(), 3);
}
