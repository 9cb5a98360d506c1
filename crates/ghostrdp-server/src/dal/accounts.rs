//! Data Access Layer for Account operations.

use crate::dal::audit_logs::append;
use crate::dal::{or_conflict, DalError, DAL};
use diesel::prelude::*;
use ghostrdp_models::models::{Account, AccountChanges, AuditLevel, NewAccount};
use ghostrdp_models::schema::users;

/// Data Access Layer for Account operations.
pub struct AccountsDAL<'a> {
    /// Reference to the main DAL instance.
    pub dal: &'a DAL,
}

fn find(conn: &mut SqliteConnection, account_id: i32) -> Result<Account, DalError> {
    users::table
        .find(account_id)
        .select(Account::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| DalError::NotFound(format!("User {} not found", account_id)))
}

impl AccountsDAL<'_> {
    /// Lists every account in id order.
    pub fn list(&self) -> Result<Vec<Account>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(users::table
            .order(users::id.asc())
            .select(Account::as_select())
            .load(conn)?)
    }

    /// Retrieves an account by id.
    pub fn get(&self, account_id: i32) -> Result<Option<Account>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(users::table
            .find(account_id)
            .select(Account::as_select())
            .first(conn)
            .optional()?)
    }

    /// Creates a new account.
    ///
    /// # Arguments
    ///
    /// * `new_account` - The validated account to insert.
    ///
    /// # Returns
    ///
    /// The stored account, or `DalError::Conflict` when the username is taken.
    pub fn create(&self, new_account: &NewAccount) -> Result<Account, DalError> {
        self.dal.write(|conn| {
            let account = diesel::insert_into(users::table)
                .values(new_account)
                .returning(Account::as_returning())
                .get_result(conn)
                .map_err(|e| {
                    or_conflict(e, || {
                        format!("Username '{}' already exists", new_account.username)
                    })
                })?;

            append(
                conn,
                AuditLevel::Info,
                format!("User created: {} (id {})", account.username, account.id),
            )?;
            Ok(account)
        })
    }

    /// Applies a partial update to an account.
    ///
    /// An empty patch leaves the row as it is but is still audited.
    pub fn update(&self, account_id: i32, changes: &AccountChanges) -> Result<Account, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, account_id)?;

            let account = if changes.is_empty() {
                existing
            } else {
                diesel::update(users::table.find(account_id))
                    .set(changes)
                    .returning(Account::as_returning())
                    .get_result(conn)
                    .map_err(|e| {
                        or_conflict(e, || {
                            format!(
                                "Username '{}' already exists",
                                changes.username.as_deref().unwrap_or_default()
                            )
                        })
                    })?
            };

            append(
                conn,
                AuditLevel::Info,
                format!("User updated: {} (id {})", account.username, account.id),
            )?;
            Ok(account)
        })
    }

    /// Deletes an account.
    ///
    /// # Returns
    ///
    /// The row as it was before deletion.
    pub fn delete(&self, account_id: i32) -> Result<Account, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, account_id)?;
            diesel::delete(users::table.find(account_id)).execute(conn)?;

            append(
                conn,
                AuditLevel::Warning,
                format!("User deleted: {} (id {})", existing.username, existing.id),
            )?;
            Ok(existing)
        })
    }
}
