//! Support tickets API module.

use crate::api::error::{ApiError, ErrorBody};
use crate::api::extract::{JsonBody, PathParam};
use crate::api::{AppState, MessageResponse};
use crate::dal::DAL;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use ghostrdp_models::models::{
    CreateSupportTicket, NewSupportTicket, SupportTicket, SupportTicketChanges,
};
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketList {
    pub tickets: Vec<SupportTicket>,
}

pub fn routes() -> Router<AppState> {
    info!("Setting up support ticket routes");
    Router::new()
        .route("/support", get(list_tickets).post(create_ticket))
        .route("/support/:id", put(update_ticket).delete(delete_ticket))
}

#[utoipa::path(
    get,
    path = "/api/support",
    tag = "support",
    responses(
        (status = 200, description = "All tickets in id order", body = TicketList),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list_tickets(State(dal): State<DAL>) -> Result<Json<TicketList>, ApiError> {
    info!("Handling request to list support tickets");
    let tickets = dal.support_tickets().list()?;
    Ok(Json(TicketList { tickets }))
}

#[utoipa::path(
    post,
    path = "/api/support",
    tag = "support",
    request_body = CreateSupportTicket,
    responses(
        (status = 201, description = "Ticket opened", body = SupportTicket),
        (status = 400, description = "Missing title or description", body = ErrorBody),
    )
)]
pub async fn create_ticket(
    State(dal): State<DAL>,
    JsonBody(request): JsonBody<CreateSupportTicket>,
) -> Result<(StatusCode, Json<SupportTicket>), ApiError> {
    info!("Handling request to open a support ticket");
    let new_ticket = NewSupportTicket::try_from(request).map_err(|e| {
        warn!("Invalid support ticket payload: {}", e);
        ApiError::Validation(e)
    })?;

    let ticket = dal.support_tickets().create(&new_ticket)?;
    info!("Successfully opened support ticket with ID: {}", ticket.id);
    Ok((StatusCode::CREATED, Json(ticket)))
}

#[utoipa::path(
    put,
    path = "/api/support/{id}",
    tag = "support",
    params(("id" = i32, Path, description = "ID of the ticket")),
    request_body = SupportTicketChanges,
    responses(
        (status = 200, description = "Ticket updated", body = SupportTicket),
        (status = 400, description = "Empty title or description, or unknown status", body = ErrorBody),
        (status = 404, description = "Ticket not found", body = ErrorBody),
    )
)]
pub async fn update_ticket(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
    JsonBody(changes): JsonBody<SupportTicketChanges>,
) -> Result<Json<SupportTicket>, ApiError> {
    info!("Handling request to update support ticket with ID: {}", id);
    let changes = changes.validate().map_err(ApiError::Validation)?;
    let ticket = dal.support_tickets().update(id, changes)?;
    info!("Support ticket {} is now {}", ticket.id, ticket.status);
    Ok(Json(ticket))
}

#[utoipa::path(
    delete,
    path = "/api/support/{id}",
    tag = "support",
    params(("id" = i32, Path, description = "ID of the ticket")),
    responses(
        (status = 200, description = "Ticket deleted", body = MessageResponse),
        (status = 404, description = "Ticket not found", body = ErrorBody),
    )
)]
pub async fn delete_ticket(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Handling request to delete support ticket with ID: {}", id);
    let ticket = dal.support_tickets().delete(id)?;
    Ok(Json(MessageResponse::new(format!(
        "Support ticket '{}' deleted",
        ticket.title
    ))))
}
