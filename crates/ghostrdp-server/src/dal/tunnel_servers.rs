//! Data Access Layer for TunnelServer operations.
//!
//! Deleting a server honours the DAL's [`PeerDeletePolicy`]: under `Orphan` its
//! peers stay behind, under `Cascade` they are removed in the same transaction.

use crate::dal::audit_logs::append;
use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use ghostrdp_models::models::{AuditLevel, NewTunnelServer, TunnelServer};
use ghostrdp_models::schema::{wg_peers, wg_servers};
use ghostrdp_utils::PeerDeletePolicy;

/// Data Access Layer for TunnelServer operations.
pub struct TunnelServersDAL<'a> {
    /// Reference to the main DAL instance.
    pub dal: &'a DAL,
}

/// Outcome of deleting a server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerDeletion {
    /// The server as it was before deletion.
    pub server: TunnelServer,
    /// Peers removed along with it; always 0 under the orphan policy.
    pub removed_peers: usize,
}

impl TunnelServersDAL<'_> {
    pub fn list(&self) -> Result<Vec<TunnelServer>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(wg_servers::table
            .order(wg_servers::id.asc())
            .select(TunnelServer::as_select())
            .load(conn)?)
    }

    pub fn get(&self, server_id: i32) -> Result<Option<TunnelServer>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(wg_servers::table
            .find(server_id)
            .select(TunnelServer::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn create(&self, new_server: &NewTunnelServer) -> Result<TunnelServer, DalError> {
        self.dal.write(|conn| {
            let server = diesel::insert_into(wg_servers::table)
                .values(new_server)
                .returning(TunnelServer::as_returning())
                .get_result(conn)?;

            append(
                conn,
                AuditLevel::Info,
                format!(
                    "WireGuard server created: {} (id {}, endpoint {})",
                    server.name, server.id, server.endpoint
                ),
            )?;
            Ok(server)
        })
    }

    /// Deletes a server, and its peers when the policy is `Cascade`.
    pub fn delete(&self, server_id: i32) -> Result<ServerDeletion, DalError> {
        let policy = self.dal.peer_delete_policy;
        self.dal.write(|conn| {
            let server = wg_servers::table
                .find(server_id)
                .select(TunnelServer::as_select())
                .first(conn)
                .optional()?
                .ok_or_else(|| {
                    DalError::NotFound(format!("WireGuard server {} not found", server_id))
                })?;

            let removed_peers = match policy {
                PeerDeletePolicy::Cascade => {
                    diesel::delete(wg_peers::table.filter(wg_peers::server_id.eq(server_id)))
                        .execute(conn)?
                }
                PeerDeletePolicy::Orphan => 0,
            };
            diesel::delete(wg_servers::table.find(server_id)).execute(conn)?;

            let message = match policy {
                PeerDeletePolicy::Cascade => format!(
                    "WireGuard server deleted: {} (id {}), {} peer(s) removed",
                    server.name, server.id, removed_peers
                ),
                PeerDeletePolicy::Orphan => {
                    format!("WireGuard server deleted: {} (id {})", server.name, server.id)
                }
            };
            append(conn, AuditLevel::Warning, message)?;

            Ok(ServerDeletion {
                server,
                removed_peers,
            })
        })
    }
}
