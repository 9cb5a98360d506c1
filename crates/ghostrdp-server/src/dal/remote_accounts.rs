//! Data Access Layer for RemoteAccount operations.

use crate::dal::audit_logs::append;
use crate::dal::{or_conflict, DalError, DAL};
use diesel::prelude::*;
use ghostrdp_models::models::{AuditLevel, NewRemoteAccount, RemoteAccount, RemoteAccountChanges};
use ghostrdp_models::schema::windows_users;

/// Data Access Layer for RemoteAccount operations.
pub struct RemoteAccountsDAL<'a> {
    /// Reference to the main DAL instance.
    pub dal: &'a DAL,
}

fn find(conn: &mut SqliteConnection, account_id: i32) -> Result<RemoteAccount, DalError> {
    windows_users::table
        .find(account_id)
        .select(RemoteAccount::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| DalError::NotFound(format!("Windows user {} not found", account_id)))
}

impl RemoteAccountsDAL<'_> {
    pub fn list(&self) -> Result<Vec<RemoteAccount>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(windows_users::table
            .order(windows_users::id.asc())
            .select(RemoteAccount::as_select())
            .load(conn)?)
    }

    /// Creates a remote account; a taken username is a `Conflict`.
    pub fn create(&self, new_account: &NewRemoteAccount) -> Result<RemoteAccount, DalError> {
        self.dal.write(|conn| {
            let account = diesel::insert_into(windows_users::table)
                .values(new_account)
                .returning(RemoteAccount::as_returning())
                .get_result(conn)
                .map_err(|e| {
                    or_conflict(e, || {
                        format!("Windows username '{}' already exists", new_account.username)
                    })
                })?;

            append(
                conn,
                AuditLevel::Info,
                format!("Windows user created: {} (id {})", account.username, account.id),
            )?;
            Ok(account)
        })
    }

    pub fn update(
        &self,
        account_id: i32,
        changes: &RemoteAccountChanges,
    ) -> Result<RemoteAccount, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, account_id)?;

            let account = if changes.is_empty() {
                existing
            } else {
                diesel::update(windows_users::table.find(account_id))
                    .set(changes)
                    .returning(RemoteAccount::as_returning())
                    .get_result(conn)
                    .map_err(|e| {
                        or_conflict(e, || {
                            format!(
                                "Windows username '{}' already exists",
                                changes.username.as_deref().unwrap_or_default()
                            )
                        })
                    })?
            };

            append(
                conn,
                AuditLevel::Info,
                format!("Windows user updated: {} (id {})", account.username, account.id),
            )?;
            Ok(account)
        })
    }

    pub fn delete(&self, account_id: i32) -> Result<RemoteAccount, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, account_id)?;
            diesel::delete(windows_users::table.find(account_id)).execute(conn)?;

            append(
                conn,
                AuditLevel::Warning,
                format!("Windows user deleted: {} (id {})", existing.username, existing.id),
            )?;
            Ok(existing)
        })
    }
}
