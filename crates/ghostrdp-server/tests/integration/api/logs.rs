use axum::http::{Method, StatusCode};
use chrono::NaiveDateTime;
use ghostrdp_models::models::AuditEntry;

use crate::fixtures::{send_json, TestFixture};

#[tokio::test]
async fn test_logs_are_newest_first_and_capped() {
    let fixture = TestFixture::new();
    for i in 0..105 {
        fixture.insert_test_account(&format!("user{:03}", i));
    }
    let app = fixture.create_test_router();

    let (status, body) = send_json(&app, Method::GET, "/api/logs", None).await;

    assert_eq!(status, StatusCode::OK);
    let logs: Vec<AuditEntry> = serde_json::from_value(body["logs"].clone()).unwrap();
    assert_eq!(logs.len(), 100);
    assert!(logs[0].message.contains("user104"));
    let timestamps: Vec<NaiveDateTime> = logs.iter().map(|e| e.timestamp).collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_reading_logs_writes_nothing() {
    let fixture = TestFixture::new();
    fixture.insert_test_account("alice");
    let app = fixture.create_test_router();

    send_json(&app, Method::GET, "/api/logs", None).await;
    send_json(&app, Method::GET, "/api/users", None).await;

    let (_, body) = send_json(&app, Method::GET, "/api/logs", None).await;
    assert_eq!(body["logs"].as_array().unwrap().len(), 1);
    assert_eq!(body["logs"][0]["level"], "INFO");
}

#[tokio::test]
async fn test_delete_entries_are_warnings() {
    let fixture = TestFixture::new();
    let account = fixture.insert_test_account("alice");
    let app = fixture.create_test_router();

    send_json(&app, Method::DELETE, &format!("/api/users/{}", account.id), None).await;

    let (_, body) = send_json(&app, Method::GET, "/api/logs", None).await;
    assert_eq!(body["logs"][0]["level"], "WARNING");
    assert_eq!(body["logs"][1]["level"], "INFO");
    assert_eq!(body["logs"].as_array().unwrap().len(), 2);
}
