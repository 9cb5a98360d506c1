//! Alert rules API module.
//!
//! Rules are stored and returned as given; nothing here evaluates them.

use crate::api::error::{ApiError, ErrorBody};
use crate::api::extract::{JsonBody, PathParam};
use crate::api::{AppState, MessageResponse};
use crate::dal::DAL;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use ghostrdp_models::models::{AlertRule, AlertRuleChanges, CreateAlertRule, NewAlertRule};
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertList {
    pub alerts: Vec<AlertRule>,
}

pub fn routes() -> Router<AppState> {
    info!("Setting up alert routes");
    Router::new()
        .route("/alerts", get(list_alerts).post(create_alert))
        .route("/alerts/:id", put(update_alert).delete(delete_alert))
}

#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = "alerts",
    responses(
        (status = 200, description = "All alert rules in id order", body = AlertList),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list_alerts(State(dal): State<DAL>) -> Result<Json<AlertList>, ApiError> {
    info!("Handling request to list alert rules");
    let alerts = dal.alert_rules().list()?;
    Ok(Json(AlertList { alerts }))
}

#[utoipa::path(
    post,
    path = "/api/alerts",
    tag = "alerts",
    request_body = CreateAlertRule,
    responses(
        (status = 201, description = "Alert rule created", body = AlertRule),
        (status = 400, description = "Missing name, condition or action", body = ErrorBody),
    )
)]
pub async fn create_alert(
    State(dal): State<DAL>,
    JsonBody(request): JsonBody<CreateAlertRule>,
) -> Result<(StatusCode, Json<AlertRule>), ApiError> {
    info!("Handling request to create an alert rule");
    let new_rule = NewAlertRule::try_from(request).map_err(|e| {
        warn!("Invalid alert rule payload: {}", e);
        ApiError::Validation(e)
    })?;

    let rule = dal.alert_rules().create(&new_rule)?;
    info!("Successfully created alert rule {} with ID: {}", rule.name, rule.id);
    Ok((StatusCode::CREATED, Json(rule)))
}

#[utoipa::path(
    put,
    path = "/api/alerts/{id}",
    tag = "alerts",
    params(("id" = i32, Path, description = "ID of the alert rule")),
    request_body = AlertRuleChanges,
    responses(
        (status = 200, description = "Alert rule updated", body = AlertRule),
        (status = 400, description = "A required field was set to an empty value", body = ErrorBody),
        (status = 404, description = "Alert rule not found", body = ErrorBody),
    )
)]
pub async fn update_alert(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
    JsonBody(changes): JsonBody<AlertRuleChanges>,
) -> Result<Json<AlertRule>, ApiError> {
    info!("Handling request to update alert rule with ID: {}", id);
    let changes = changes.validate().map_err(ApiError::Validation)?;
    let rule = dal.alert_rules().update(id, &changes)?;
    Ok(Json(rule))
}

#[utoipa::path(
    delete,
    path = "/api/alerts/{id}",
    tag = "alerts",
    params(("id" = i32, Path, description = "ID of the alert rule")),
    responses(
        (status = 200, description = "Alert rule deleted", body = MessageResponse),
        (status = 404, description = "Alert rule not found", body = ErrorBody),
    )
)]
pub async fn delete_alert(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Handling request to delete alert rule with ID: {}", id);
    let rule = dal.alert_rules().delete(id)?;
    Ok(Json(MessageResponse::new(format!(
        "Alert rule {} deleted",
        rule.name
    ))))
}
