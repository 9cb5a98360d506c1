//! Tasks API module.

use crate::api::error::{ApiError, ErrorBody};
use crate::api::extract::{JsonBody, PathParam};
use crate::api::{AppState, MessageResponse};
use crate::dal::DAL;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use ghostrdp_models::models::{CreateTask, NewTask, Task, TaskChanges};
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

pub fn routes() -> Router<AppState> {
    info!("Setting up task routes");
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id", put(update_task).delete(delete_task))
}

#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks in id order", body = TaskList),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list_tasks(State(dal): State<DAL>) -> Result<Json<TaskList>, ApiError> {
    info!("Handling request to list tasks");
    let tasks = dal.tasks().list()?;
    info!("Successfully retrieved {} tasks", tasks.len());
    Ok(Json(TaskList { tasks }))
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Missing description or unknown status", body = ErrorBody),
    )
)]
pub async fn create_task(
    State(dal): State<DAL>,
    JsonBody(request): JsonBody<CreateTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    info!("Handling request to create a task");
    let new_task = NewTask::try_from(request).map_err(|e| {
        warn!("Invalid task payload: {}", e);
        ApiError::Validation(e)
    })?;

    let task = dal.tasks().create(&new_task)?;
    info!("Successfully created task with ID: {}", task.id);
    Ok((StatusCode::CREATED, Json(task)))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(("id" = i32, Path, description = "ID of the task")),
    request_body = TaskChanges,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Empty description or unknown status", body = ErrorBody),
        (status = 404, description = "Task not found", body = ErrorBody),
    )
)]
pub async fn update_task(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
    JsonBody(changes): JsonBody<TaskChanges>,
) -> Result<Json<Task>, ApiError> {
    info!("Handling request to update task with ID: {}", id);
    let changes = changes.validate().map_err(ApiError::Validation)?;

    let task = dal.tasks().update(id, changes)?;
    info!("Successfully updated task with ID: {} (status {})", id, task.status);
    Ok(Json(task))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "tasks",
    params(("id" = i32, Path, description = "ID of the task")),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 404, description = "Task not found", body = ErrorBody),
    )
)]
pub async fn delete_task(
    State(dal): State<DAL>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Handling request to delete task with ID: {}", id);
    dal.tasks().delete(id)?;
    Ok(Json(MessageResponse::new(format!("Task {} deleted", id))))
}
