use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::fixtures::{send_json, TestFixture};

#[tokio::test]
async fn test_create_user_defaults_to_enabled() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, body) =
        send_json(&app, Method::POST, "/api/users", Some(json!({"username": "alice"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["enabled"], true);
    assert!(body["created_at"].is_string());
    assert_eq!(fixture.audit_count(), 1);
    assert!(fixture.last_audit_message().contains("alice"));
}

#[tokio::test]
async fn test_duplicate_username_is_a_conflict() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    send_json(&app, Method::POST, "/api/users", Some(json!({"username": "alice"}))).await;
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"username": "alice", "enabled": false})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "conflict");
    assert!(body["description"].as_str().unwrap().contains("alice"));

    let (_, list) = send_json(&app, Method::GET, "/api/users", None).await;
    let users = list["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["enabled"], true);
    assert_eq!(fixture.audit_count(), 1);
}

#[tokio::test]
async fn test_create_user_requires_username() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    for payload in [json!({}), json!({"username": ""}), json!({"username": "   "})] {
        let (status, body) = send_json(&app, Method::POST, "/api/users", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation");
        assert_eq!(body["description"], "username is required");
    }

    assert!(fixture.dal.accounts().list().unwrap().is_empty());
    assert_eq!(fixture.audit_count(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"username": "alice", "enabled": "yes"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
    assert!(fixture.dal.accounts().list().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_users_in_id_order() {
    let fixture = TestFixture::new();
    fixture.insert_test_account("carol");
    fixture.insert_test_account("alice");
    let app = fixture.create_test_router();

    let (status, body) = send_json(&app, Method::GET, "/api/users", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["carol", "alice"]);
}

#[tokio::test]
async fn test_update_user_merges_fields() {
    let fixture = TestFixture::new();
    let account = fixture.insert_test_account("alice");
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/users/{}", account.id),
        Some(json!({"enabled": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["enabled"], false);
    assert_eq!(fixture.audit_count(), 2);
    assert!(fixture.last_audit_message().starts_with("User updated: alice"));
}

#[tokio::test]
async fn test_update_user_to_taken_name_is_rolled_back() {
    let fixture = TestFixture::new();
    fixture.insert_test_account("alice");
    let bob = fixture.insert_test_account("bob");
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/users/{}", bob.id),
        Some(json!({"username": "alice"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "conflict");
    let stored = fixture.dal.accounts().get(bob.id).unwrap().unwrap();
    assert_eq!(stored.username, "bob");
    assert_eq!(fixture.audit_count(), 2);
}

#[tokio::test]
async fn test_update_user_with_empty_username_is_rejected() {
    let fixture = TestFixture::new();
    let account = fixture.insert_test_account("alice");
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/users/{}", account.id),
        Some(json!({"username": " "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
    assert_eq!(fixture.audit_count(), 1);
}

#[tokio::test]
async fn test_update_unknown_user_is_404() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, body) =
        send_json(&app, Method::PUT, "/api/users/42", Some(json!({"enabled": false}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["description"], "User 42 not found");
}

#[tokio::test]
async fn test_non_numeric_user_id_is_a_validation_error() {
    let fixture = TestFixture::new();
    fixture.insert_test_account("alice");
    let app = fixture.create_test_router();

    let (status, body) =
        send_json(&app, Method::PUT, "/api/users/abc", Some(json!({"enabled": false}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
    assert!(body["description"].as_str().unwrap().contains("abc"));
    assert_eq!(fixture.audit_count(), 1);
}

#[tokio::test]
async fn test_delete_user() {
    let fixture = TestFixture::new();
    let account = fixture.insert_test_account("alice");
    let app = fixture.create_test_router();
    let uri = format!("/api/users/{}", account.id);

    let (status, body) = send_json(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User alice deleted");
    assert!(fixture.dal.accounts().list().unwrap().is_empty());
    assert!(fixture.last_audit_message().starts_with("User deleted: alice"));

    let (status, _) = send_json(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(fixture.audit_count(), 2);
}
