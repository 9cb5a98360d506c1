use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::fixtures::{send_json, TestFixture};

#[tokio::test]
async fn test_dashboard_on_empty_store() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, body) = send_json(&app, Method::GET, "/api/dashboard-stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"user_count": 0, "task_count": 0, "open_ticket_count": 0, "wg_peer_count": 0})
    );
}

#[tokio::test]
async fn test_dashboard_counts_open_tickets() {
    let fixture = TestFixture::new();
    fixture.insert_test_account("alice");
    fixture.insert_test_account("bob");
    let server = fixture.insert_test_server("edge-1");
    fixture.insert_test_peer(server.id, "peer-a");
    let app = fixture.create_test_router();

    send_json(&app, Method::POST, "/api/tasks", Some(json!({"description": "Patch"}))).await;
    for (title, status) in [("a", "open"), ("b", "in-progress"), ("c", "closed")] {
        let (code, _) = send_json(
            &app,
            Method::POST,
            "/api/support",
            Some(json!({"title": title, "description": "d", "status": status})),
        )
        .await;
        assert_eq!(code, StatusCode::CREATED);
    }

    let (status, body) = send_json(&app, Method::GET, "/api/dashboard-stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_count"], 2);
    assert_eq!(body["task_count"], 1);
    assert_eq!(body["open_ticket_count"], 2);
    assert_eq!(body["wg_peer_count"], 1);
}
