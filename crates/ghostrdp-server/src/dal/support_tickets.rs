//! Data Access Layer for SupportTicket operations.

use crate::dal::audit_logs::append;
use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use ghostrdp_models::models::{AuditLevel, NewSupportTicket, SupportTicket, SupportTicketChanges};
use ghostrdp_models::schema::support_tickets;

/// Data Access Layer for SupportTicket operations.
pub struct SupportTicketsDAL<'a> {
    /// Reference to the main DAL instance.
    pub dal: &'a DAL,
}

fn find(conn: &mut SqliteConnection, ticket_id: i32) -> Result<SupportTicket, DalError> {
    support_tickets::table
        .find(ticket_id)
        .select(SupportTicket::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| DalError::NotFound(format!("Support ticket {} not found", ticket_id)))
}

impl SupportTicketsDAL<'_> {
    pub fn list(&self) -> Result<Vec<SupportTicket>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(support_tickets::table
            .order(support_tickets::id.asc())
            .select(SupportTicket::as_select())
            .load(conn)?)
    }

    pub fn create(&self, new_ticket: &NewSupportTicket) -> Result<SupportTicket, DalError> {
        self.dal.write(|conn| {
            let ticket = diesel::insert_into(support_tickets::table)
                .values(new_ticket)
                .returning(SupportTicket::as_returning())
                .get_result(conn)?;

            append(
                conn,
                AuditLevel::Info,
                format!("Support ticket created: {} (id {})", ticket.title, ticket.id),
            )?;
            Ok(ticket)
        })
    }

    /// Applies a partial update and advances `updated_at`.
    pub fn update(
        &self,
        ticket_id: i32,
        changes: SupportTicketChanges,
    ) -> Result<SupportTicket, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, ticket_id)?;
            let changes = changes.touch(existing.updated_at);

            let ticket = diesel::update(support_tickets::table.find(ticket_id))
                .set(&changes)
                .returning(SupportTicket::as_returning())
                .get_result(conn)?;

            append(
                conn,
                AuditLevel::Info,
                format!(
                    "Support ticket updated: {} (id {}, status {})",
                    ticket.title, ticket.id, ticket.status
                ),
            )?;
            Ok(ticket)
        })
    }

    pub fn delete(&self, ticket_id: i32) -> Result<SupportTicket, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, ticket_id)?;
            diesel::delete(support_tickets::table.find(ticket_id)).execute(conn)?;

            append(
                conn,
                AuditLevel::Warning,
                format!("Support ticket deleted: {} (id {})", existing.title, existing.id),
            )?;
            Ok(existing)
        })
    }
}
