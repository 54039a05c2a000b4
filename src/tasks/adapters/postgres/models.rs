//! Diesel row models for task list and task persistence.

use super::schema::{task_lists, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row model for task list records, used for reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = task_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskListRow {
    /// Task list identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model for the mutable task list columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = task_lists)]
#[diesel(treat_none_as_null = true)]
pub struct TaskListChangeset {
    /// New title.
    pub title: String,
    /// New description; `None` clears the column.
    pub description: Option<String>,
    /// Refreshed update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Row model for task records, used for reads and inserts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning task list.
    pub task_list_id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Status in storage form.
    pub status: String,
    /// Priority in storage form.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model for the mutable task columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// New title.
    pub title: String,
    /// New description; `None` clears the column.
    pub description: Option<String>,
    /// New due date; `None` clears the column.
    pub due_date: Option<DateTime<Utc>>,
    /// New status in storage form.
    pub status: String,
    /// New priority in storage form.
    pub priority: String,
    /// Refreshed update timestamp.
    pub updated_at: DateTime<Utc>,
}
