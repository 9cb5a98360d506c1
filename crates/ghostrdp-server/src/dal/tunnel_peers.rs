//! Data Access Layer for TunnelPeer operations.

use crate::dal::audit_logs::append;
use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use ghostrdp_models::models::{
    AuditLevel, NewTunnelPeer, PeerWithServer, TunnelPeer, TunnelServerSummary,
};
use ghostrdp_models::schema::{wg_peers, wg_servers};

/// Data Access Layer for TunnelPeer operations.
pub struct TunnelPeersDAL<'a> {
    /// Reference to the main DAL instance.
    pub dal: &'a DAL,
}

impl TunnelPeersDAL<'_> {
    /// Lists every peer in id order with a summary of its server.
    ///
    /// Peers whose server no longer exists come back with `server: None`.
    ///
    /// # SQL Query
    ///
    /// ```sql
    /// SELECT wg_peers.*, wg_servers.id, wg_servers.name, wg_servers.endpoint
    /// FROM wg_peers
    /// LEFT OUTER JOIN wg_servers ON wg_peers.server_id = wg_servers.id
    /// ORDER BY wg_peers.id ASC
    /// ```
    pub fn list(&self) -> Result<Vec<PeerWithServer>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        let rows: Vec<(TunnelPeer, Option<TunnelServerSummary>)> = wg_peers::table
            .left_join(wg_servers::table)
            .order(wg_peers::id.asc())
            .select((
                TunnelPeer::as_select(),
                Option::<TunnelServerSummary>::as_select(),
            ))
            .load(conn)?;

        Ok(rows
            .into_iter()
            .map(|(peer, server)| PeerWithServer { peer, server })
            .collect())
    }

    /// Creates a peer after checking, in the same transaction, that its server exists.
    ///
    /// # Returns
    ///
    /// The stored peer with its server summary, or `DalError::Validation` when
    /// `server_id` does not name an existing server.
    pub fn create(&self, new_peer: &NewTunnelPeer) -> Result<PeerWithServer, DalError> {
        self.dal.write(|conn| {
            let server = wg_servers::table
                .find(new_peer.server_id)
                .select(TunnelServerSummary::as_select())
                .first(conn)
                .optional()?
                .ok_or_else(|| {
                    DalError::Validation(format!(
                        "WireGuard server {} does not exist",
                        new_peer.server_id
                    ))
                })?;

            let peer = diesel::insert_into(wg_peers::table)
                .values(new_peer)
                .returning(TunnelPeer::as_returning())
                .get_result(conn)?;

            append(
                conn,
                AuditLevel::Info,
                format!(
                    "WireGuard peer created: {} (id {}, server {})",
                    peer.public_key, peer.id, server.name
                ),
            )?;
            Ok(PeerWithServer {
                peer,
                server: Some(server),
            })
        })
    }

    pub fn delete(&self, peer_id: i32) -> Result<TunnelPeer, DalError> {
        self.dal.write(|conn| {
            let existing = wg_peers::table
                .find(peer_id)
                .select(TunnelPeer::as_select())
                .first(conn)
                .optional()?
                .ok_or_else(|| DalError::NotFound(format!("WireGuard peer {} not found", peer_id)))?;
            diesel::delete(wg_peers::table.find(peer_id)).execute(conn)?;

            append(
                conn,
                AuditLevel::Warning,
                format!(
                    "WireGuard peer deleted: {} (id {})",
                    existing.public_key, existing.id
                ),
            )?;
            Ok(existing)
        })
    }
}
