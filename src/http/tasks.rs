//! Handlers for the `/task-lists/{task_list_id}/tasks` resource.

use super::{AppState, ApiError, dto::TaskDto};
use crate::tasks::{
    domain::{TaskId, TaskListId},
    ports::{TaskListRepository, TaskRepository},
    services::TaskServiceError,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use mockable::Clock;

pub(super) async fn list<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<TaskListId>, PathRejection>,
) -> Result<Json<Vec<TaskDto>>, ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(task_list_id) = path?;
    let tasks = state.tasks.list_tasks(task_list_id).await?;
    Ok(Json(tasks.iter().map(TaskDto::from).collect()))
}

pub(super) async fn create<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<TaskListId>, PathRejection>,
    payload: Result<Json<TaskDto>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskDto>), ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(task_list_id) = path?;
    let Json(dto) = payload?;
    let created = state.tasks.create_task(task_list_id, dto.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub(super) async fn get_one<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<(TaskListId, TaskId)>, PathRejection>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path((task_list_id, task_id)) = path?;
    let task = state
        .tasks
        .get_task(task_list_id, task_id)
        .await?
        .ok_or(TaskServiceError::TaskNotFound {
            task_list_id,
            task_id,
        })?;
    Ok(Json(task.into()))
}

pub(super) async fn update<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<(TaskListId, TaskId)>, PathRejection>,
    payload: Result<Json<TaskDto>, JsonRejection>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path((task_list_id, task_id)) = path?;
    let Json(dto) = payload?;
    let updated = state
        .tasks
        .update_task(task_list_id, task_id, dto.into())
        .await?;
    Ok(Json(updated.into()))
}

pub(super) async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<(TaskListId, TaskId)>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path((task_list_id, task_id)) = path?;
    state.tasks.delete_task(task_list_id, task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
