//! Mirrors of Windows accounts on the remote desktop host (`windows_users` table).
//!
//! Same shape as [`crate::models::accounts`], but the usernames live in their own
//! namespace: `alice` may exist as both a gateway account and a remote account.

use crate::models::{now, required, required_if_present};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A remote desktop account.
#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema,
)]
#[diesel(table_name = crate::schema::windows_users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RemoteAccount {
    pub id: i32,
    pub username: String,
    pub enabled: bool,
    pub created_at: NaiveDateTime,
}

/// Request body for creating a remote account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateRemoteAccount {
    pub username: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::windows_users)]
pub struct NewRemoteAccount {
    pub username: String,
    pub enabled: bool,
    pub created_at: NaiveDateTime,
}

impl NewRemoteAccount {
    pub fn new(username: Option<String>, enabled: Option<bool>) -> Result<Self, String> {
        Ok(NewRemoteAccount {
            username: required("username", username)?,
            enabled: enabled.unwrap_or(true),
            created_at: now(),
        })
    }
}

impl TryFrom<CreateRemoteAccount> for NewRemoteAccount {
    type Error = String;

    fn try_from(request: CreateRemoteAccount) -> Result<Self, Self::Error> {
        NewRemoteAccount::new(request.username, request.enabled)
    }
}

/// Partial update for a remote account.
#[derive(AsChangeset, Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::windows_users)]
pub struct RemoteAccountChanges {
    pub username: Option<String>,
    pub enabled: Option<bool>,
}

impl RemoteAccountChanges {
    pub fn validate(self) -> Result<Self, String> {
        Ok(RemoteAccountChanges {
            username: required_if_present("username", self.username)?,
            enabled: self.enabled,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.enabled.is_none()
    }
}
