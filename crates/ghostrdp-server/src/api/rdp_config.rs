//! Connection-profile download.

use crate::api::error::{ApiError, ErrorBody};
use crate::api::extract::PathParam;
use crate::api::AppState;
use crate::dal::DAL;
use crate::utils::rdp_profile;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use ghostrdp_utils::config::Gateway;
use ghostrdp_utils::logging::prelude::*;

pub fn routes() -> Router<AppState> {
    info!("Setting up rdp config routes");
    Router::new().route("/rdp-config/:user_id", get(download_rdp_config))
}

/// Generates a remote desktop profile for a user and returns it as a download.
#[utoipa::path(
    get,
    path = "/api/rdp-config/{user_id}",
    tag = "rdp-config",
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Profile file", content_type = "application/x-rdp", body = String),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
pub async fn download_rdp_config(
    State(dal): State<DAL>,
    State(gateway): State<Gateway>,
    PathParam(user_id): PathParam<i32>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Handling request to generate rdp config for user ID: {}", user_id);
    let account = dal
        .accounts()
        .get(user_id)?
        .ok_or_else(|| {
            warn!("rdp config requested for unknown user ID: {}", user_id);
            ApiError::NotFound(format!("User {} not found", user_id))
        })?;

    let body = rdp_profile::render(&gateway.address, &account.username);
    let file_name = rdp_profile::file_name(&account.username);
    info!("Generated rdp config {} for user {}", file_name, account.username);

    Ok((
        [
            (header::CONTENT_TYPE, rdp_profile::CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                rdp_profile::content_disposition(&file_name),
            ),
        ],
        body,
    ))
}
