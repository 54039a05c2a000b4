//! HTTP transport exposing task lists and tasks as JSON resources.
//!
//! Handlers are thin: they decode the wire types from [`dto`], call the
//! services and encode the result. Failures become [`ApiError`] responses.

pub mod dto;
mod error;
mod task_lists;
mod tasks;

pub use dto::{TaskDto, TaskListDto};
pub use error::{ApiError, ErrorResponse};

use crate::tasks::{
    ports::{TaskListRepository, TaskRepository},
    services::{TaskListService, TaskService},
};
use axum::{Json, Router, routing::get};
use mockable::Clock;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared handler state holding both services over one store.
pub struct AppState<R, C>
where
    R: TaskListRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    task_lists: Arc<TaskListService<R, C>>,
    tasks: Arc<TaskService<R, C>>,
}

impl<R, C> AppState<R, C>
where
    R: TaskListRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    /// Builds the services over the given store and clock.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            task_lists: Arc::new(TaskListService::new(
                Arc::clone(&repository),
                Arc::clone(&clock),
            )),
            tasks: Arc::new(TaskService::new(repository, clock)),
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskListRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            task_lists: Arc::clone(&self.task_lists),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

/// Builds the application router with request tracing and permissive CORS.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/task-lists",
            get(task_lists::list::<R, C>).post(task_lists::create::<R, C>),
        )
        .route(
            "/task-lists/{task_list_id}",
            get(task_lists::get_one::<R, C>)
                .put(task_lists::update::<R, C>)
                .delete(task_lists::delete::<R, C>),
        )
        .route(
            "/task-lists/{task_list_id}/tasks",
            get(tasks::list::<R, C>).post(tasks::create::<R, C>),
        )
        .route(
            "/task-lists/{task_list_id}/tasks/{task_id}",
            get(tasks::get_one::<R, C>)
                .put(tasks::update::<R, C>)
                .delete(tasks::delete::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
