//! Error taxonomy shared by the task list and task services.

use crate::tasks::{
    domain::{TaskDomainError, TaskId, TaskListId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Service-level errors for task list and task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The request was malformed or disallowed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The addressed task list does not exist.
    #[error("task list not found: {0}")]
    TaskListNotFound(TaskListId),

    /// The addressed task does not exist in the given list.
    #[error("task {task_id} not found in task list {task_list_id}")]
    TaskNotFound {
        /// Task list used for the scoped lookup.
        task_list_id: TaskListId,
        /// Missing task.
        task_id: TaskId,
    },

    /// The store failed; propagated unchanged.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::TaskListNotFound(id) => Self::TaskListNotFound(id),
            TaskRepositoryError::TaskNotFound {
                task_list_id,
                task_id,
            } => Self::TaskNotFound {
                task_list_id,
                task_id,
            },
            other => Self::Repository(other),
        }
    }
}

impl TaskServiceError {
    /// Returns `true` when the error reports a missing entity.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TaskListNotFound(_) | Self::TaskNotFound { .. }
        )
    }
}

/// Result type for service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
