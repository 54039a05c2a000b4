//! `PostgreSQL` adapters for task list and task persistence.

mod migrations;
mod models;
mod repository;
mod schema;

pub use migrations::{CREATE_TASK_LISTS_SQL, apply_migrations};
pub use repository::{PostgresTaskStore, TaskPgPool, build_pool};
