use axum::http::{Method, StatusCode};
use serde_json::json;
use tokio::net::TcpListener;

use crate::fixtures::{send_json, TestFixture};

#[tokio::test]
async fn test_setup_status_without_remote_api() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, body) = send_json(&app, Method::GET, "/api/setup-status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"database": "ok", "wireguard_api": "not configured"}));
}

#[tokio::test]
async fn test_setup_status_with_unreachable_remote_api() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fixture = TestFixture::new().with_remote_api_url(&format!("http://{}/", addr));
    let app = fixture.create_test_router();

    let (status, body) = send_json(&app, Method::GET, "/api/setup-status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wireguard_api"], "unreachable");
}

#[tokio::test]
async fn test_setup_status_with_reachable_remote_api() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let remote = axum::Router::new().fallback(|| async { "wg" });
        axum::serve(listener, remote).await.unwrap();
    });

    let fixture = TestFixture::new().with_remote_api_url(&format!("http://{}/", addr));
    let app = fixture.create_test_router();

    let (_, body) = send_json(&app, Method::GET, "/api/setup-status", None).await;
    assert_eq!(body["wireguard_api"], "reachable");
}

#[tokio::test]
async fn test_setup_status_reports_missing_database() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();
    std::fs::remove_file(&fixture.database_path).unwrap();

    let (status, body) = send_json(&app, Method::GET, "/api/setup-status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "missing");
}
