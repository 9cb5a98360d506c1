//! Users API module.
//!
//! CRUD routes for gateway user accounts.

use crate::api::error::{ApiError, ErrorBody};
use crate::api::extract::{JsonBody, PathParam};
use crate::api::{AppState, MessageResponse};
use crate::dal::DAL;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use ghostrdp_models::models::{Account, AccountChanges, CreateAccount, NewAccount};
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for the user listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserList {
    pub users: Vec<Account>,
}

/// Creates and returns the router for user endpoints.
pub fn routes() -> Router<AppState> {
    info!("Setting up user routes");
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users in id order", body = UserList),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list_users(State(dal): State<DAL>) -> Result<Json<UserList>, ApiError> {
    info!("Handling request to list users");
    let users = dal.accounts().list()?;
    info!("Successfully retrieved {} users", users.len());
    Ok(Json(UserList { users }))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateAccount,
    responses(
        (status = 201, description = "User created", body = Account),
        (status = 400, description = "Missing username or username already taken", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn create_user(
    State(dal): State<DAL>,
    JsonBody(request): JsonBody<CreateAccount>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    info!("Handling request to create a user");
    let new_account = NewAccount::try_from(request).map_err(|e| {
        warn!("Invalid user payload: {}", e);
        ApiError::Validation(e)
    })?;

    let account = dal.accounts().create(&new_account)?;
    info!(
        "Successfully created user {} with ID: {}",
        account.username, account.id
    );
    Ok((StatusCode::CREATED, Json(account)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "ID of the user")),
    request_body = AccountChanges,
    responses(
        (status = 200, description = "User updated", body = Account),
        (status = 400, description = "Empty username or username already taken", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
pub async fn update_user(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
    JsonBody(changes): JsonBody<AccountChanges>,
) -> Result<Json<Account>, ApiError> {
    info!("Handling request to update user with ID: {}", id);
    let changes = changes.validate().map_err(ApiError::Validation)?;

    let account = dal.accounts().update(id, &changes)?;
    info!("Successfully updated user with ID: {}", id);
    Ok(Json(account))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
pub async fn delete_user(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Handling request to delete user with ID: {}", id);
    let account = dal.accounts().delete(id)?;
    info!("Successfully deleted user with ID: {}", id);
    Ok(Json(MessageResponse::new(format!(
        "User {} deleted",
        account.username
    ))))
}
