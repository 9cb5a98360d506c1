use axum::http::{Method, Request, StatusCode};
use axum::body::Body;
use serde_json::json;
use tower::ServiceExt;

use crate::fixtures::{send, send_json, TestFixture};

#[tokio::test]
async fn test_root_greeting() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, _, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hello from ghost-rdp backend!");
}

#[tokio::test]
async fn test_healthz_endpoint() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, _, body) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_api_status() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, body) = send_json(&app, Method::GET, "/api/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK", "message": "Backend is running."}));
}

#[tokio::test]
async fn test_metrics_endpoint_reports_routed_requests() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    send(&app, Method::GET, "/api/users", None).await;
    let (status, headers, body) = send(&app, Method::GET, "/metrics", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("text/plain; version=0.0.4")
    );
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("ghostrdp_http_requests_total"));
    assert!(text.contains("endpoint=\"/api/users\""));
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, doc) = send_json(&app, Method::GET, "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let paths = doc["paths"].as_object().expect("paths object");
    for path in [
        "/api/users",
        "/api/users/{id}",
        "/api/tasks",
        "/api/alerts",
        "/api/support",
        "/api/wg/servers",
        "/api/wg/peers/{id}",
        "/api/windows-users",
        "/api/logs",
        "/api/rdp-config/{user_id}",
        "/api/setup-status",
        "/api/dashboard-stats",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    assert!(doc["components"]["schemas"]["ErrorBody"].is_object());
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/status")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, _, _) = send(&app, Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
