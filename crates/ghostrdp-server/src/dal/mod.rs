//! # Data Access Layer
//!
//! One accessor per table, all borrowing the shared [`DAL`]. Reads check a
//! connection out of the pool; every mutation runs inside an `IMMEDIATE`
//! transaction together with the audit entry it produces, so either both are
//! committed or neither is.

use crate::db::ConnectionPool;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use ghostrdp_utils::PeerDeletePolicy;
use thiserror::Error;

mod accounts;
mod alert_rules;
mod audit_logs;
mod dashboard;
mod remote_accounts;
mod support_tickets;
mod tasks;
mod tunnel_peers;
mod tunnel_servers;

pub use accounts::AccountsDAL;
pub use alert_rules::AlertRulesDAL;
pub use audit_logs::AuditLogsDAL;
pub use dashboard::DashboardDAL;
pub use remote_accounts::RemoteAccountsDAL;
pub use support_tickets::SupportTicketsDAL;
pub use tasks::TasksDAL;
pub use tunnel_peers::TunnelPeersDAL;
pub use tunnel_servers::{ServerDeletion, TunnelServersDAL};

/// Errors returned by every DAL operation.
#[derive(Debug, Error)]
pub enum DalError {
    /// The request was well formed but names something that cannot be written.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness constraint rejected the write; nothing was committed.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Database error: {0}")]
    Query(#[source] DieselError),
}

impl From<DieselError> for DalError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::NotFound => DalError::NotFound("Record not found".to_string()),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                DalError::Conflict(info.message().to_string())
            }
            other => DalError::Query(other),
        }
    }
}

/// Maps a unique violation to a `Conflict` carrying `message`; every other error converts as usual.
pub(crate) fn or_conflict(err: DieselError, message: impl FnOnce() -> String) -> DalError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DalError::Conflict(message())
        }
        other => other.into(),
    }
}

/// Data Access Layer handle shared by every request.
#[derive(Clone)]
pub struct DAL {
    /// Pooled SQLite connections.
    pub pool: ConnectionPool,
    /// What deleting a tunnel server does to its peers.
    pub peer_delete_policy: PeerDeletePolicy,
}

impl DAL {
    /// Creates a DAL that leaves peers in place when their server is deleted.
    pub fn new(pool: ConnectionPool) -> Self {
        DAL {
            pool,
            peer_delete_policy: PeerDeletePolicy::default(),
        }
    }

    pub fn with_peer_delete_policy(mut self, policy: PeerDeletePolicy) -> Self {
        self.peer_delete_policy = policy;
        self
    }

    pub fn accounts(&self) -> AccountsDAL<'_> {
        AccountsDAL { dal: self }
    }

    pub fn remote_accounts(&self) -> RemoteAccountsDAL<'_> {
        RemoteAccountsDAL { dal: self }
    }

    pub fn tasks(&self) -> TasksDAL<'_> {
        TasksDAL { dal: self }
    }

    pub fn alert_rules(&self) -> AlertRulesDAL<'_> {
        AlertRulesDAL { dal: self }
    }

    pub fn support_tickets(&self) -> SupportTicketsDAL<'_> {
        SupportTicketsDAL { dal: self }
    }

    pub fn tunnel_servers(&self) -> TunnelServersDAL<'_> {
        TunnelServersDAL { dal: self }
    }

    pub fn tunnel_peers(&self) -> TunnelPeersDAL<'_> {
        TunnelPeersDAL { dal: self }
    }

    pub fn audit_logs(&self) -> AuditLogsDAL<'_> {
        AuditLogsDAL { dal: self }
    }

    pub fn dashboard(&self) -> DashboardDAL<'_> {
        DashboardDAL { dal: self }
    }

    /// Runs `f` in an `IMMEDIATE` transaction, taking the write lock up front.
    pub(crate) fn write<T, F>(&self, f: F) -> Result<T, DalError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, DalError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        conn.immediate_transaction(f)
    }

    /// Runs `f` in a deferred (read) transaction, so every query sees one snapshot.
    pub(crate) fn read<T, F>(&self, f: F) -> Result<T, DalError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, DalError>,
    {
        let mut pooled = self.pool.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        conn.transaction(f)
    }

    /// Checks that the database file is present and answers a trivial query.
    pub fn ping(&self) -> Result<(), DalError> {
        if !self.pool.database_exists() {
            return Err(DalError::NotFound(format!(
                "Database '{}' does not exist",
                self.pool.database_url
            )));
        }
        let mut conn = self.pool.get()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    }
}
