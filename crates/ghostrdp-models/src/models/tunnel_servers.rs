//! # Tunnel Servers Module
//!
//! WireGuard server definitions (`wg_servers` table). Servers are created and
//! deleted, never updated.
//!
//! ## Core Data Model
//!
//! - `id`: i32 - Unique identifier
//! - `name`: String - Display name
//! - `endpoint`: String - Public `host:port` that peers dial
//! - `public_key` / `private_key`: String - Interface key pair
//! - `address`: String - Interface address in CIDR form
//! - `created_at`: NaiveDateTime
//!
//! The private key is kept in the database as given and is never serialized into
//! a response body.

use crate::models::{now, required};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a tunnel server in the system.
#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema,
)]
#[diesel(table_name = crate::schema::wg_servers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TunnelServer {
    pub id: i32,
    pub name: String,
    pub endpoint: String,
    pub public_key: String,
    #[serde(skip_serializing, default)]
    pub private_key: String,
    pub address: String,
    pub created_at: NaiveDateTime,
}

/// The part of a server embedded in peer listings.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::wg_servers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TunnelServerSummary {
    pub id: i32,
    pub name: String,
    pub endpoint: String,
}

/// Request body for creating a tunnel server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTunnelServer {
    pub name: Option<String>,
    pub endpoint: Option<String>,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub address: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::wg_servers)]
pub struct NewTunnelServer {
    pub name: String,
    pub endpoint: String,
    pub public_key: String,
    pub private_key: String,
    pub address: String,
    pub created_at: NaiveDateTime,
}

impl NewTunnelServer {
    /// Creates a new `NewTunnelServer` instance. Every field is required.
    pub fn new(
        name: Option<String>,
        endpoint: Option<String>,
        public_key: Option<String>,
        private_key: Option<String>,
        address: Option<String>,
    ) -> Result<Self, String> {
        Ok(NewTunnelServer {
            name: required("name", name)?,
            endpoint: required("endpoint", endpoint)?,
            public_key: required("public_key", public_key)?,
            private_key: required("private_key", private_key)?,
            address: required("address", address)?,
            created_at: now(),
        })
    }
}

impl TryFrom<CreateTunnelServer> for NewTunnelServer {
    type Error = String;

    fn try_from(request: CreateTunnelServer) -> Result<Self, Self::Error> {
        NewTunnelServer::new(
            request.name,
            request.endpoint,
            request.public_key,
            request.private_key,
            request.address,
        )
    }
}
