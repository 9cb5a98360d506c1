//! # Tunnel Peers Module
//!
//! WireGuard peers (`wg_peers` table). Each peer points at a tunnel server through
//! `server_id`. The reference is checked when the peer is created; there is no
//! foreign key, so a peer can outlive its server when servers are deleted under the
//! `orphan` policy.
//!
//! ## Core Data Model
//!
//! - `id`: i32 - Unique identifier
//! - `server_id`: i32 - The server this peer belongs to
//! - `public_key`: String - Peer public key, identifies the peer in audit messages
//! - `allowed_ips`: String - Comma separated CIDR list, stored as given
//! - `preshared_key`: Option<String> - Optional; an empty string is stored as absent
//! - `created_at`: NaiveDateTime

use crate::models::{now, required, TunnelServerSummary};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Represents a tunnel peer in the system.
#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema,
)]
#[diesel(table_name = crate::schema::wg_peers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TunnelPeer {
    pub id: i32,
    pub server_id: i32,
    pub public_key: String,
    pub allowed_ips: String,
    pub preshared_key: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A peer as it appears in listings, with a summary of its server.
///
/// `server` is `None` when the server has been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeerWithServer {
    #[serde(flatten)]
    pub peer: TunnelPeer,
    pub server: Option<TunnelServerSummary>,
}

/// Request body for creating a tunnel peer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTunnelPeer {
    /// Accepted as a number or a numeric string.
    #[serde(default, deserialize_with = "deserialize_server_id")]
    pub server_id: Option<i32>,
    pub public_key: Option<String>,
    pub allowed_ips: Option<String>,
    pub preshared_key: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::wg_peers)]
pub struct NewTunnelPeer {
    pub server_id: i32,
    pub public_key: String,
    pub allowed_ips: String,
    pub preshared_key: Option<String>,
    pub created_at: NaiveDateTime,
}

impl NewTunnelPeer {
    /// Creates a new `NewTunnelPeer` instance.
    ///
    /// Only checks that the fields are present. Whether `server_id` names an
    /// existing server is decided inside the insert transaction.
    pub fn new(
        server_id: Option<i32>,
        public_key: Option<String>,
        allowed_ips: Option<String>,
        preshared_key: Option<String>,
    ) -> Result<Self, String> {
        let server_id = server_id.ok_or_else(|| "server_id is required".to_string())?;
        Ok(NewTunnelPeer {
            server_id,
            public_key: required("public_key", public_key)?,
            allowed_ips: required("allowed_ips", allowed_ips)?,
            preshared_key: preshared_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            created_at: now(),
        })
    }
}

impl TryFrom<CreateTunnelPeer> for NewTunnelPeer {
    type Error = String;

    fn try_from(request: CreateTunnelPeer) -> Result<Self, Self::Error> {
        NewTunnelPeer::new(
            request.server_id,
            request.public_key,
            request.allowed_ips,
            request.preshared_key,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

fn deserialize_server_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = match Option::<NumberOrString>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrString::Number(n)) => n,
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("server_id '{}' is not a number", s)))?,
    };
    i32::try_from(value)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("server_id {} is out of range", value)))
}
