//! # Tasks Module
//!
//! Scheduled administrative tasks (`tasks` table).
//!
//! ## Core Data Model
//!
//! - `id`: i32 - Unique identifier
//! - `description`: String - What needs doing, non-empty
//! - `status`: TaskStatus - `pending` (default), `in-progress` or `completed`
//! - `created_at`: NaiveDateTime - Creation timestamp
//! - `updated_at`: NaiveDateTime - Advanced on every mutation
//!
//! ## Usage
//!
//! ```rust
//! use ghostrdp_models::models::{NewTask, TaskStatus};
//!
//! let task = NewTask::new(Some("Rotate gateway certificate".to_string()), None).unwrap();
//! assert_eq!(task.status, TaskStatus::Pending);
//! ```

use crate::models::{next_update_timestamp, now, required, required_if_present, TaskStatus};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a task in the system.
#[derive(
    Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema,
)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Task {
    /// Unique identifier for the task
    pub id: i32,
    /// Free-form description
    pub description: String,
    /// Current status
    pub status: TaskStatus,
    /// Timestamp when the task was created
    pub created_at: NaiveDateTime,
    /// Timestamp of the last mutation
    pub updated_at: NaiveDateTime,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTask {
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Represents a new task to be inserted into the database.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTask {
    pub description: String,
    pub status: TaskStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewTask {
    /// Creates a new `NewTask` instance.
    ///
    /// Both timestamps start out equal.
    pub fn new(description: Option<String>, status: Option<TaskStatus>) -> Result<Self, String> {
        let created_at = now();
        Ok(NewTask {
            description: required("description", description)?,
            status: status.unwrap_or_default(),
            created_at,
            updated_at: created_at,
        })
    }
}

impl TryFrom<CreateTask> for NewTask {
    type Error = String;

    fn try_from(request: CreateTask) -> Result<Self, Self::Error> {
        NewTask::new(request.description, request.status)
    }
}

/// Partial update for a task.
///
/// `updated_at` is never taken from the request; it is filled in by [`TaskChanges::touch`].
#[derive(AsChangeset, Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::tasks)]
pub struct TaskChanges {
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    #[serde(skip)]
    pub updated_at: Option<NaiveDateTime>,
}

impl TaskChanges {
    pub fn validate(self) -> Result<Self, String> {
        Ok(TaskChanges {
            description: required_if_present("description", self.description)?,
            ..self
        })
    }

    /// Sets `updated_at` to a value strictly later than `previous`.
    pub fn touch(mut self, previous: NaiveDateTime) -> Self {
        self.updated_at = Some(next_update_timestamp(previous));
        self
    }
}
