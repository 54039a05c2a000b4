//! Repository ports for task lists and the tasks they own.

use crate::tasks::domain::{Task, TaskId, TaskList, TaskListId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task list persistence contract.
#[async_trait]
pub trait TaskListRepository: Send + Sync {
    /// Returns every stored task list, oldest first.
    async fn list_task_lists(&self) -> TaskRepositoryResult<Vec<TaskList>>;

    /// Finds a task list by identifier.
    ///
    /// Returns `None` when the task list does not exist.
    async fn find_task_list(&self, id: TaskListId) -> TaskRepositoryResult<Option<TaskList>>;

    /// Stores a new task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTaskList`] when the identifier
    /// already exists.
    async fn store_task_list(&self, task_list: &TaskList) -> TaskRepositoryResult<()>;

    /// Persists title, description and timestamp changes of a task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::TaskListNotFound`] when the task list
    /// does not exist.
    async fn update_task_list(&self, task_list: &TaskList) -> TaskRepositoryResult<()>;

    /// Deletes a task list together with all of its tasks.
    ///
    /// Both deletions happen in one unit of work. Deleting an absent task
    /// list succeeds without effect.
    async fn delete_task_list(&self, id: TaskListId) -> TaskRepositoryResult<()>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Finds a task by identifier regardless of its owning list.
    async fn find_task(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task owned by the given task list, oldest first.
    async fn find_tasks_by_task_list(
        &self,
        task_list_id: TaskListId,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task scoped by its owning task list.
    ///
    /// Returns `None` when the task does not exist or belongs to another
    /// list.
    async fn find_task_in_list(
        &self,
        task_list_id: TaskListId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::TaskListNotFound`] when the owning task
    /// list does not exist, or [`TaskRepositoryError::DuplicateTask`] when
    /// the identifier already exists.
    async fn store_task(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task, scoped by its owning list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::TaskNotFound`] when no task with the
    /// identifier exists in the task's list.
    async fn update_task(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Deletes a task scoped by its owning list.
    ///
    /// Deleting an absent task succeeds without effect.
    async fn delete_task_in_list(
        &self,
        task_list_id: TaskListId,
        id: TaskId,
    ) -> TaskRepositoryResult<()>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task list with the same identifier already exists.
    #[error("duplicate task list identifier: {0}")]
    DuplicateTaskList(TaskListId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task list was not found.
    #[error("task list not found: {0}")]
    TaskListNotFound(TaskListId),

    /// The task was not found in the given list.
    #[error("task {task_id} not found in task list {task_list_id}")]
    TaskNotFound {
        /// Owning task list used for the scoped lookup.
        task_list_id: TaskListId,
        /// Missing task.
        task_id: TaskId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
