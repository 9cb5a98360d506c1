//! Aggregate counts shown on the dashboard.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counts computed at request time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub user_count: i64,
    pub task_count: i64,
    /// Tickets whose status is anything but `closed`.
    pub open_ticket_count: i64,
    pub wg_peer_count: i64,
}

impl DashboardStats {
    /// Builds the stats from raw counts; `open_ticket_count` is `ticket_count - closed_ticket_count`.
    pub fn new(
        user_count: i64,
        task_count: i64,
        ticket_count: i64,
        closed_ticket_count: i64,
        wg_peer_count: i64,
    ) -> Self {
        DashboardStats {
            user_count,
            task_count,
            open_ticket_count: ticket_count - closed_ticket_count,
            wg_peer_count,
        }
    }
}
