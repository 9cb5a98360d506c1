//! Windows users API module.
//!
//! CRUD routes for the remote desktop account mirrors.

use crate::api::error::{ApiError, ErrorBody};
use crate::api::extract::{JsonBody, PathParam};
use crate::api::{AppState, MessageResponse};
use crate::dal::DAL;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use ghostrdp_models::models::{
    CreateRemoteAccount, NewRemoteAccount, RemoteAccount, RemoteAccountChanges,
};
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WindowsUserList {
    pub windows_users: Vec<RemoteAccount>,
}

pub fn routes() -> Router<AppState> {
    info!("Setting up windows user routes");
    Router::new()
        .route(
            "/windows-users",
            get(list_windows_users).post(create_windows_user),
        )
        .route(
            "/windows-users/:id",
            put(update_windows_user).delete(delete_windows_user),
        )
}

#[utoipa::path(
    get,
    path = "/api/windows-users",
    tag = "windows-users",
    responses(
        (status = 200, description = "All Windows users in id order", body = WindowsUserList),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list_windows_users(
    State(dal): State<DAL>,
) -> Result<Json<WindowsUserList>, ApiError> {
    info!("Handling request to list windows users");
    let windows_users = dal.remote_accounts().list()?;
    Ok(Json(WindowsUserList { windows_users }))
}

#[utoipa::path(
    post,
    path = "/api/windows-users",
    tag = "windows-users",
    request_body = CreateRemoteAccount,
    responses(
        (status = 201, description = "Windows user created", body = RemoteAccount),
        (status = 400, description = "Missing username or username already taken", body = ErrorBody),
    )
)]
pub async fn create_windows_user(
    State(dal): State<DAL>,
    JsonBody(request): JsonBody<CreateRemoteAccount>,
) -> Result<(StatusCode, Json<RemoteAccount>), ApiError> {
    info!("Handling request to create a windows user");
    let new_account = NewRemoteAccount::try_from(request).map_err(|e| {
        warn!("Invalid windows user payload: {}", e);
        ApiError::Validation(e)
    })?;

    let account = dal.remote_accounts().create(&new_account)?;
    info!(
        "Successfully created windows user {} with ID: {}",
        account.username, account.id
    );
    Ok((StatusCode::CREATED, Json(account)))
}

#[utoipa::path(
    put,
    path = "/api/windows-users/{id}",
    tag = "windows-users",
    params(("id" = i32, Path, description = "ID of the Windows user")),
    request_body = RemoteAccountChanges,
    responses(
        (status = 200, description = "Windows user updated", body = RemoteAccount),
        (status = 400, description = "Empty username or username already taken", body = ErrorBody),
        (status = 404, description = "Windows user not found", body = ErrorBody),
    )
)]
pub async fn update_windows_user(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
    JsonBody(changes): JsonBody<RemoteAccountChanges>,
) -> Result<Json<RemoteAccount>, ApiError> {
    info!("Handling request to update windows user with ID: {}", id);
    let changes = changes.validate().map_err(ApiError::Validation)?;
    let account = dal.remote_accounts().update(id, &changes)?;
    Ok(Json(account))
}

#[utoipa::path(
    delete,
    path = "/api/windows-users/{id}",
    tag = "windows-users",
    params(("id" = i32, Path, description = "ID of the Windows user")),
    responses(
        (status = 200, description = "Windows user deleted", body = MessageResponse),
        (status = 404, description = "Windows user not found", body = ErrorBody),
    )
)]
pub async fn delete_windows_user(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Handling request to delete windows user with ID: {}", id);
    let account = dal.remote_accounts().delete(id)?;
    Ok(Json(MessageResponse::new(format!(
        "Windows user {} deleted",
        account.username
    ))))
}
