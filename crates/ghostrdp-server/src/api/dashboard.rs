//! Dashboard aggregate.

use crate::api::error::{ApiError, ErrorBody};
use crate::api::AppState;
use crate::dal::DAL;
use crate::metrics;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use ghostrdp_models::models::DashboardStats;
use ghostrdp_utils::logging::prelude::*;

pub fn routes() -> Router<AppState> {
    info!("Setting up dashboard routes");
    Router::new().route("/dashboard-stats", get(dashboard_stats))
}

/// Counts computed at request time from a single snapshot of the store.
#[utoipa::path(
    get,
    path = "/api/dashboard-stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Aggregate counts", body = DashboardStats),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn dashboard_stats(State(dal): State<DAL>) -> Result<Json<DashboardStats>, ApiError> {
    debug!("Handling request for dashboard stats");
    let stats = dal.dashboard().stats()?;
    metrics::update_entity_counts(&stats);
    Ok(Json(stats))
}
