//! Audit log models for the access log shown on the dashboard.
//!
//! Entries are append-only. One is written in the same transaction as every
//! successful create, update or delete; nothing updates or removes them except
//! the retention prune.

use crate::models::{now, AuditLevel};
use crate::schema::audit_logs;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Constants
// =============================================================================

/// Number of entries returned by the recent-log query.
pub const RECENT_LOG_LIMIT: i64 = 100;

// =============================================================================
// Models
// =============================================================================

/// A stored audit entry.
#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema,
)]
#[diesel(table_name = audit_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AuditEntry {
    pub id: i32,
    pub level: AuditLevel,
    pub message: String,
    pub timestamp: NaiveDateTime,
}

/// An audit entry to be appended.
#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = audit_logs)]
pub struct NewAuditEntry {
    pub level: AuditLevel,
    pub message: String,
    pub timestamp: NaiveDateTime,
}

impl NewAuditEntry {
    /// Creates a new entry stamped with the current time.
    ///
    /// # Returns
    ///
    /// An error when the message is blank.
    pub fn new(level: AuditLevel, message: impl Into<String>) -> Result<Self, String> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err("Audit message cannot be empty".to_string());
        }
        Ok(NewAuditEntry {
            level,
            message,
            timestamp: now(),
        })
    }

    /// Entry for a create or update.
    pub fn info(message: impl Into<String>) -> Result<Self, String> {
        Self::new(AuditLevel::Info, message)
    }

    /// Entry for a delete.
    pub fn warning(message: impl Into<String>) -> Result<Self, String> {
        Self::new(AuditLevel::Warning, message)
    }
}
