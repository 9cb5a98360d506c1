//! Aggregate reads for the dashboard.

use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use ghostrdp_models::models::{DashboardStats, TicketStatus};
use ghostrdp_models::schema::{support_tickets, tasks, users, wg_peers};

pub struct DashboardDAL<'a> {
    pub dal: &'a DAL,
}

impl DashboardDAL<'_> {
    /// Counts users, tasks, open tickets and peers within one read transaction.
    pub fn stats(&self) -> Result<DashboardStats, DalError> {
        self.dal.read(|conn| {
            let user_count: i64 = users::table.count().get_result(conn)?;
            let task_count: i64 = tasks::table.count().get_result(conn)?;
            let ticket_count: i64 = support_tickets::table.count().get_result(conn)?;
            let closed_ticket_count: i64 = support_tickets::table
                .filter(support_tickets::status.eq(TicketStatus::Closed))
                .count()
                .get_result(conn)?;
            let wg_peer_count: i64 = wg_peers::table.count().get_result(conn)?;

            Ok(DashboardStats::new(
                user_count,
                task_count,
                ticket_count,
                closed_ticket_count,
                wg_peer_count,
            ))
        })
    }
}
