//! Setup status: is the store usable, and can the gateway's remote API be reached.

use crate::api::AppState;
use crate::dal::DAL;
use crate::utils::probe::{check_reachability, Reachability};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use ghostrdp_utils::config::Gateway;
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Ok,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SetupStatus {
    pub database: DatabaseStatus,
    pub wireguard_api: Reachability,
}

pub fn routes() -> Router<AppState> {
    info!("Setting up setup status routes");
    Router::new().route("/setup-status", get(setup_status))
}

/// Reports store and remote API health. Probe failures are reported in the body,
/// never as an error status.
#[utoipa::path(
    get,
    path = "/api/setup-status",
    tag = "status",
    responses(
        (status = 200, description = "Store and remote API status", body = SetupStatus),
    )
)]
pub async fn setup_status(
    State(dal): State<DAL>,
    State(gateway): State<Gateway>,
) -> Json<SetupStatus> {
    debug!("Handling request for setup status");
    let database = match dal.ping() {
        Ok(()) => DatabaseStatus::Ok,
        Err(e) => {
            warn!("Database check failed: {}", e);
            DatabaseStatus::Missing
        }
    };

    let wireguard_api =
        check_reachability(gateway.remote_api_url(), gateway.probe_timeout()).await;

    Json(SetupStatus {
        database,
        wireguard_api,
    })
}
