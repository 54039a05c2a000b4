//! Handlers for the `/task-lists` resource.

use super::{AppState, ApiError, dto::TaskListDto};
use crate::tasks::{
    domain::TaskListId,
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
) -> Result<Json<Vec<TaskListDto>>, ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let overviews = state.task_lists.list_task_lists().await?;
    Ok(Json(overviews.into_iter().map(TaskListDto::from).collect()))
}

pub(super) async fn create<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<TaskListDto>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskListDto>), ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(dto) = payload?;
    let created = state.task_lists.create_task_list(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub(super) async fn get_one<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<TaskListId>, PathRejection>,
) -> Result<Json<TaskListDto>, ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(task_list_id) = path?;
    let overview = state
        .task_lists
        .get_task_list(task_list_id)
        .await?
        .ok_or(TaskServiceError::TaskListNotFound(task_list_id))?;
    Ok(Json(overview.into()))
}

pub(super) async fn update<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<TaskListId>, PathRejection>,
    payload: Result<Json<TaskListDto>, JsonRejection>,
) -> Result<Json<TaskListDto>, ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(task_list_id) = path?;
    let Json(dto) = payload?;
    let updated = state
        .task_lists
        .update_task_list(task_list_id, dto.into())
        .await?;
    Ok(Json(updated.into()))
}

pub(super) async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<TaskListId>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: TaskListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(task_list_id) = path?;
    state.task_lists.delete_task_list(task_list_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
