//! Data Access Layer for Task operations.

use crate::dal::audit_logs::append;
use crate::dal::{DalError, DAL};
use diesel::prelude::*;
use ghostrdp_models::models::{AuditLevel, NewTask, Task, TaskChanges};
use ghostrdp_models::schema::tasks;

/// Data Access Layer for Task operations.
pub struct TasksDAL<'a> {
    /// Reference to the main DAL instance.
    pub dal: &'a DAL,
}

fn find(conn: &mut SqliteConnection, task_id: i32) -> Result<Task, DalError> {
    tasks::table
        .find(task_id)
        .select(Task::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| DalError::NotFound(format!("Task {} not found", task_id)))
}

impl TasksDAL<'_> {
    /// Lists every task in id order.
    pub fn list(&self) -> Result<Vec<Task>, DalError> {
        let conn = &mut self.dal.pool.get()?;
        Ok(tasks::table
            .order(tasks::id.asc())
            .select(Task::as_select())
            .load(conn)?)
    }

    pub fn create(&self, new_task: &NewTask) -> Result<Task, DalError> {
        self.dal.write(|conn| {
            let task = diesel::insert_into(tasks::table)
                .values(new_task)
                .returning(Task::as_returning())
                .get_result(conn)?;

            append(
                conn,
                AuditLevel::Info,
                format!("Task created: {} (id {})", task.description, task.id),
            )?;
            Ok(task)
        })
    }

    /// Applies a partial update. `updated_at` always moves forward, even for an empty patch.
    pub fn update(&self, task_id: i32, changes: TaskChanges) -> Result<Task, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, task_id)?;
            let changes = changes.touch(existing.updated_at);

            let task = diesel::update(tasks::table.find(task_id))
                .set(&changes)
                .returning(Task::as_returning())
                .get_result(conn)?;

            append(
                conn,
                AuditLevel::Info,
                format!(
                    "Task updated: {} (id {}, status {})",
                    task.description, task.id, task.status
                ),
            )?;
            Ok(task)
        })
    }

    pub fn delete(&self, task_id: i32) -> Result<Task, DalError> {
        self.dal.write(|conn| {
            let existing = find(conn, task_id)?;
            diesel::delete(tasks::table.find(task_id)).execute(conn)?;

            append(
                conn,
                AuditLevel::Warning,
                format!("Task deleted: {} (id {})", existing.description, existing.id),
            )?;
            Ok(existing)
        })
    }
}
