use ghostrdp_models::models::NewTunnelPeer;
use ghostrdp_server::dal::DalError;
use ghostrdp_utils::PeerDeletePolicy;

use crate::fixtures::TestFixture;

#[test]
fn test_peer_requires_existing_server() {
    let fixture = TestFixture::new();
    let new_peer = NewTunnelPeer::new(
        Some(5),
        Some("peer".to_string()),
        Some("10.8.0.2/32".to_string()),
        None,
    )
    .unwrap();

    let err = fixture.dal.tunnel_peers().create(&new_peer).unwrap_err();

    assert!(matches!(err, DalError::Validation(_)));
    assert!(fixture.dal.tunnel_peers().list().unwrap().is_empty());
}

#[test]
fn test_orphan_policy_keeps_peers() {
    let fixture = TestFixture::new();
    let server = fixture.insert_test_server("edge-1");
    let peer = fixture.insert_test_peer(server.id, "peer-a");

    let deletion = fixture.dal.tunnel_servers().delete(server.id).unwrap();

    assert_eq!(deletion.removed_peers, 0);
    assert_eq!(deletion.server.id, server.id);
    let peers = fixture.dal.tunnel_peers().list().unwrap();
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].peer, peer.peer);
    assert!(peers[0].server.is_none());
    assert_eq!(
        fixture.last_audit_message(),
        format!("WireGuard server deleted: edge-1 (id {})", server.id)
    );
}

#[test]
fn test_cascade_policy_removes_only_that_servers_peers() {
    let fixture = TestFixture::with_policy(PeerDeletePolicy::Cascade);
    let server = fixture.insert_test_server("edge-1");
    let other = fixture.insert_test_server("edge-2");
    fixture.insert_test_peer(server.id, "peer-a");
    let kept = fixture.insert_test_peer(other.id, "peer-b");

    let deletion = fixture.dal.tunnel_servers().delete(server.id).unwrap();

    assert_eq!(deletion.removed_peers, 1);
    let peers = fixture.dal.tunnel_peers().list().unwrap();
    assert_eq!(peers, vec![kept]);
    assert!(fixture.last_audit_message().ends_with(", 1 peer(s) removed"));
}

#[test]
fn test_server_listing_keeps_private_key_in_store() {
    let fixture = TestFixture::new();
    fixture.insert_test_server("edge-1");

    let servers = fixture.dal.tunnel_servers().list().unwrap();

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].private_key, "edge-1-private");
}
