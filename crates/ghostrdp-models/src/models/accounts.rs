//! # Accounts Module
//!
//! Gateway user accounts (`users` table).
//!
//! ## Core Data Model
//!
//! - `id`: i32 - Unique identifier, assigned by the database
//! - `username`: String - Unique, non-empty login name
//! - `enabled`: bool - Whether the account may connect (default true)
//! - `created_at`: NaiveDateTime - When the account was created
//!
//! `CreateAccount` is the request body for creation, `NewAccount` is the validated
//! insert, and `AccountChanges` is the merge-patch applied on update.

use crate::models::{now, required, required_if_present};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a gateway account in the system.
#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Account {
    /// Unique identifier for the account
    pub id: i32,
    /// Login name, unique across accounts
    pub username: String,
    /// Whether the account is enabled
    pub enabled: bool,
    /// Timestamp when the account was created
    pub created_at: NaiveDateTime,
}

/// Request body for creating an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateAccount {
    pub username: Option<String>,
    pub enabled: Option<bool>,
}

/// Represents a new account to be inserted into the database.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewAccount {
    pub username: String,
    pub enabled: bool,
    pub created_at: NaiveDateTime,
}

impl NewAccount {
    /// Creates a new `NewAccount` instance.
    ///
    /// # Arguments
    ///
    /// * `username` - Login name; surrounding whitespace is trimmed
    /// * `enabled` - Defaults to true when not given
    ///
    /// # Returns
    ///
    /// A `Result` containing the validated insert, or an error message when the username is missing or blank.
    pub fn new(username: Option<String>, enabled: Option<bool>) -> Result<Self, String> {
        Ok(NewAccount {
            username: required("username", username)?,
            enabled: enabled.unwrap_or(true),
            created_at: now(),
        })
    }
}

impl TryFrom<CreateAccount> for NewAccount {
    type Error = String;

    fn try_from(request: CreateAccount) -> Result<Self, Self::Error> {
        NewAccount::new(request.username, request.enabled)
    }
}

/// Partial update for an account. Fields left as `None` are not touched.
#[derive(AsChangeset, Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::users)]
pub struct AccountChanges {
    pub username: Option<String>,
    pub enabled: Option<bool>,
}

impl AccountChanges {
    /// Trims and checks the fields that are present.
    pub fn validate(self) -> Result<Self, String> {
        Ok(AccountChanges {
            username: required_if_present("username", self.username)?,
            enabled: self.enabled,
        })
    }

    /// True when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.enabled.is_none()
    }
}
