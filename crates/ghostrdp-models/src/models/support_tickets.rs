//! # Support Tickets Module
//!
//! ## Core Data Model
//!
//! - `id`: i32 - Unique identifier
//! - `title`: String - Short summary, non-empty
//! - `description`: String - Long text body, non-empty
//! - `status`: TicketStatus - `open` (default), `in-progress` or `closed`
//! - `created_at` / `updated_at`: NaiveDateTime
//!
//! Every ticket that is not `closed` counts as open on the dashboard.

use crate::models::{next_update_timestamp, now, required, required_if_present, TicketStatus};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a support ticket in the system.
#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema,
)]
#[diesel(table_name = crate::schema::support_tickets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SupportTicket {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for opening a ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateSupportTicket {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::support_tickets)]
pub struct NewSupportTicket {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewSupportTicket {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        status: Option<TicketStatus>,
    ) -> Result<Self, String> {
        let created_at = now();
        Ok(NewSupportTicket {
            title: required("title", title)?,
            description: required("description", description)?,
            status: status.unwrap_or_default(),
            created_at,
            updated_at: created_at,
        })
    }
}

impl TryFrom<CreateSupportTicket> for NewSupportTicket {
    type Error = String;

    fn try_from(request: CreateSupportTicket) -> Result<Self, Self::Error> {
        NewSupportTicket::new(request.title, request.description, request.status)
    }
}

/// Partial update for a ticket. `updated_at` is set by [`SupportTicketChanges::touch`].
#[derive(AsChangeset, Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::support_tickets)]
pub struct SupportTicketChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    #[serde(skip)]
    pub updated_at: Option<NaiveDateTime>,
}

impl SupportTicketChanges {
    pub fn validate(self) -> Result<Self, String> {
        Ok(SupportTicketChanges {
            title: required_if_present("title", self.title)?,
            description: required_if_present("description", self.description)?,
            ..self
        })
    }

    pub fn touch(mut self, previous: NaiveDateTime) -> Self {
        self.updated_at = Some(next_update_timestamp(previous));
        self
    }
}
