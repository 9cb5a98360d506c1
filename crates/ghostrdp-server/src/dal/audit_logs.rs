//! Data Access Layer for AuditEntry operations.
//!
//! Entries are written by the other accessors through [`append`], inside their own
//! write transaction. This accessor only reads and prunes.

use crate::dal::{DalError, DAL};
use chrono::{Duration, NaiveDateTime};
use diesel::prelude::*;
use ghostrdp_models::models::audit_logs::RECENT_LOG_LIMIT;
use ghostrdp_models::models::{now, AuditEntry, AuditLevel, NewAuditEntry};
use ghostrdp_models::schema::audit_logs;

/// Appends one entry on the connection of an open transaction.
pub(crate) fn append(
    conn: &mut SqliteConnection,
    level: AuditLevel,
    message: String,
) -> Result<AuditEntry, DalError> {
    let entry = NewAuditEntry::new(level, message).map_err(DalError::Validation)?;
    Ok(diesel::insert_into(audit_logs::table)
        .values(&entry)
        .returning(AuditEntry::as_returning())
        .get_result(conn)?)
}

/// Data Access Layer for AuditEntry operations.
pub struct AuditLogsDAL<'a> {
    /// Reference to the main DAL instance.
    pub dal: &'a DAL,
}

impl AuditLogsDAL<'_> {
    /// Returns the most recent entries, newest first.
    ///
    /// Entries sharing a timestamp are ordered by id, highest first.
    pub fn recent(&self) -> Result<Vec<AuditEntry>, DalError> {
        self.latest(RECENT_LOG_LIMIT)
    }

    /// Returns up to `limit` entries, newest first.
    pub fn latest(&self, limit: i64) -> Result<Vec<AuditEntry>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(audit_logs::table
            .order((audit_logs::timestamp.desc(), audit_logs::id.desc()))
            .limit(limit)
            .select(AuditEntry::as_select())
            .load(conn)?)
    }

    /// Counts every stored entry.
    pub fn count(&self) -> Result<i64, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(audit_logs::table.count().get_result(conn)?)
    }

    /// Deletes entries written before `cutoff`.
    ///
    /// # Returns
    ///
    /// The number of entries removed.
    pub fn prune_older_than(&self, cutoff: NaiveDateTime) -> Result<usize, DalError> {
        self.dal.write(|conn| {
            Ok(diesel::delete(audit_logs::table.filter(audit_logs::timestamp.lt(cutoff)))
                .execute(conn)?)
        })
    }

    /// Deletes entries older than `days` days.
    pub fn prune_older_than_days(&self, days: i64) -> Result<usize, DalError> {
        if days < 0 {
            return Err(DalError::Validation(
                "Retention must be zero or more days".to_string(),
            ));
        }
        self.prune_older_than(now() - Duration::days(days))
    }
}
