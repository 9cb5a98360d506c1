use axum::http::{Method, StatusCode};
use ghostrdp_utils::PeerDeletePolicy;
use serde_json::json;

use crate::fixtures::{send_json, TestFixture};

fn server_payload() -> serde_json::Value {
    json!({
        "name": "edge-1",
        "endpoint": "vpn.example.com:51820",
        "public_key": "c2VydmVyLXB1YmxpYw==",
        "private_key": "c2VydmVyLXByaXZhdGU=",
        "address": "10.8.0.1/24"
    })
}

#[tokio::test]
async fn test_create_server_never_echoes_private_key() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, body) =
        send_json(&app, Method::POST, "/api/wg/servers", Some(server_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "edge-1");
    assert!(body.get("private_key").is_none());

    let (_, list) = send_json(&app, Method::GET, "/api/wg/servers", None).await;
    assert_eq!(list["servers"].as_array().unwrap().len(), 1);
    assert!(list["servers"][0].get("private_key").is_none());

    let stored = fixture.dal.tunnel_servers().get(1).unwrap().unwrap();
    assert_eq!(stored.private_key, "c2VydmVyLXByaXZhdGU=");
    assert!(fixture
        .last_audit_message()
        .contains("edge-1 (id 1, endpoint vpn.example.com:51820)"));
}

#[tokio::test]
async fn test_create_server_requires_every_field() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let mut payload = server_payload();
    payload.as_object_mut().unwrap().remove("private_key");
    let (status, body) = send_json(&app, Method::POST, "/api/wg/servers", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], "private_key is required");
    assert!(fixture.dal.tunnel_servers().list().unwrap().is_empty());
}

#[tokio::test]
async fn test_peer_for_unknown_server_is_rejected() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/wg/peers",
        Some(json!({"server_id": 999, "public_key": "peer", "allowed_ips": "10.8.0.2/32"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
    assert_eq!(body["description"], "WireGuard server 999 does not exist");
    assert!(fixture.dal.tunnel_peers().list().unwrap().is_empty());
    assert_eq!(fixture.audit_count(), 0);
}

#[tokio::test]
async fn test_create_peer_accepts_string_server_id() {
    let fixture = TestFixture::new();
    let server = fixture.insert_test_server("edge-1");
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/wg/peers",
        Some(json!({
            "server_id": server.id.to_string(),
            "public_key": "cGVlci1rZXk=",
            "allowed_ips": "10.8.0.2/32, 192.168.50.0/24",
            "preshared_key": ""
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["server_id"], server.id);
    assert_eq!(body["allowed_ips"], "10.8.0.2/32, 192.168.50.0/24");
    assert!(body["preshared_key"].is_null());
    assert_eq!(body["server"]["endpoint"], "edge-1.vpn.test:51820");
    assert!(fixture.last_audit_message().contains("cGVlci1rZXk="));
}

#[tokio::test]
async fn test_create_peer_requires_server_id() {
    let fixture = TestFixture::new();
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/wg/peers",
        Some(json!({"public_key": "k", "allowed_ips": "10.8.0.2/32"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], "server_id is required");
}

#[tokio::test]
async fn test_peer_listing_embeds_server_summary() {
    let fixture = TestFixture::new();
    let server = fixture.insert_test_server("edge-1");
    fixture.insert_test_peer(server.id, "peer-a");
    let app = fixture.create_test_router();

    let (status, body) = send_json(&app, Method::GET, "/api/wg/peers", None).await;

    assert_eq!(status, StatusCode::OK);
    let peer = &body["peers"][0];
    assert_eq!(peer["public_key"], "peer-a");
    assert_eq!(
        peer["server"],
        json!({"id": server.id, "name": "edge-1", "endpoint": "edge-1.vpn.test:51820"})
    );
}

#[tokio::test]
async fn test_delete_server_orphans_peers_by_default() {
    let fixture = TestFixture::new();
    let server = fixture.insert_test_server("edge-1");
    fixture.insert_test_peer(server.id, "peer-a");
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/wg/servers/{}", server.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "WireGuard server edge-1 deleted");

    let (_, list) = send_json(&app, Method::GET, "/api/wg/peers", None).await;
    let peers = list["peers"].as_array().unwrap();
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0]["server_id"], server.id);
    assert!(peers[0]["server"].is_null());
}

#[tokio::test]
async fn test_delete_server_cascades_when_configured() {
    let fixture = TestFixture::with_policy(PeerDeletePolicy::Cascade);
    let server = fixture.insert_test_server("edge-1");
    let other = fixture.insert_test_server("edge-2");
    fixture.insert_test_peer(server.id, "peer-a");
    fixture.insert_test_peer(server.id, "peer-b");
    fixture.insert_test_peer(other.id, "peer-c");
    let audit_before = fixture.audit_count();
    let app = fixture.create_test_router();

    let (status, body) = send_json(
        &app,
        Method::DELETE,
        &format!("/api/wg/servers/{}", server.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "WireGuard server edge-1 deleted along with 2 peer(s)");

    let (_, list) = send_json(&app, Method::GET, "/api/wg/peers", None).await;
    let peers = list["peers"].as_array().unwrap();
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0]["public_key"], "peer-c");

    assert_eq!(fixture.audit_count(), audit_before + 1);
    assert!(fixture.last_audit_message().ends_with("2 peer(s) removed"));
}

#[tokio::test]
async fn test_delete_peer_and_unknown_ids() {
    let fixture = TestFixture::new();
    let server = fixture.insert_test_server("edge-1");
    let peer = fixture.insert_test_peer(server.id, "peer-a");
    let app = fixture.create_test_router();
    let uri = format!("/api/wg/peers/{}", peer.peer.id);

    let (status, _) = send_json(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fixture.last_audit_message().starts_with("WireGuard peer deleted: peer-a"));

    let (status, _) = send_json(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send_json(&app, Method::DELETE, "/api/wg/servers/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
