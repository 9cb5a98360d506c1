//! Data models for our application to interact with
pub mod accounts;
pub mod alert_rules;
pub mod audit_logs;
pub mod dashboard;
pub mod remote_accounts;
pub mod status;
pub mod support_tickets;
pub mod tasks;
pub mod tunnel_peers;
pub mod tunnel_servers;

pub use accounts::{Account, AccountChanges, CreateAccount, NewAccount};
pub use alert_rules::{AlertRule, AlertRuleChanges, CreateAlertRule, NewAlertRule};
pub use audit_logs::{AuditEntry, NewAuditEntry};
pub use dashboard::DashboardStats;
pub use remote_accounts::{CreateRemoteAccount, NewRemoteAccount, RemoteAccount, RemoteAccountChanges};
pub use status::{AuditLevel, TaskStatus, TicketStatus};
pub use support_tickets::{CreateSupportTicket, NewSupportTicket, SupportTicket, SupportTicketChanges};
pub use tasks::{CreateTask, NewTask, Task, TaskChanges};
pub use tunnel_peers::{CreateTunnelPeer, NewTunnelPeer, PeerWithServer, TunnelPeer};
pub use tunnel_servers::{CreateTunnelServer, NewTunnelServer, TunnelServer, TunnelServerSummary};

use chrono::{Duration, NaiveDateTime, Utc};

/// Current UTC time as stored in the database.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Timestamp for a mutation of a row last touched at `previous`.
///
/// Always strictly later than `previous`, even when the clock has not moved
/// past it.
pub fn next_update_timestamp(previous: NaiveDateTime) -> NaiveDateTime {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Trims a required string field, failing when it is absent or blank.
pub(crate) fn required(field: &str, value: Option<String>) -> Result<String, String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("{} is required", field)),
    }
}

/// Same as [`required`], for fields that may be left out of a partial update.
pub(crate) fn required_if_present(
    field: &str,
    value: Option<String>,
) -> Result<Option<String>, String> {
    value.map(|v| required(field, Some(v))).transpose()
}
