//! Audit log API module.

use crate::api::error::{ApiError, ErrorBody};
use crate::api::AppState;
use crate::dal::DAL;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use ghostrdp_models::models::AuditEntry;
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogList {
    pub logs: Vec<AuditEntry>,
}

pub fn routes() -> Router<AppState> {
    info!("Setting up audit log routes");
    Router::new().route("/logs", get(list_logs))
}

/// Returns the latest audit entries, newest first.
#[utoipa::path(
    get,
    path = "/api/logs",
    tag = "logs",
    responses(
        (status = 200, description = "Up to 100 entries, newest first", body = LogList),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list_logs(State(dal): State<DAL>) -> Result<Json<LogList>, ApiError> {
    debug!("Handling request to list audit logs");
    let logs = dal.audit_logs().recent()?;
    Ok(Json(LogList { logs }))
}
