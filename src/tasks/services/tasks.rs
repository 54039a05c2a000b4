//! Service layer for tasks inside a task list.

use super::{
    error::{TaskServiceError, TaskServiceResult},
    validation::{ensure_matching_id, ensure_unassigned},
};
use crate::tasks::{
    domain::{
        EntityKind, NewTaskData, Task, TaskChanges, TaskDomainError, TaskId, TaskListId,
        TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskListRepository, TaskRepository},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for creating a task.
///
/// There is no status setter: new tasks always start open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    id: Option<TaskId>,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Option<TaskPriority>,
}

impl CreateTaskRequest {
    /// Creates a request with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            due_date: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Carries a client-supplied identifier, which creation rejects.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Request payload for updating a task.
///
/// Every mutable field is replaced; status and priority are mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: Option<TaskId>,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl UpdateTaskRequest {
    /// Creates a request replacing the title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            due_date: None,
            status: None,
            priority: None,
        }
    }

    /// Sets the identifier of the task being updated.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskListRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskListRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task of the given task list.
    ///
    /// An unknown task list simply has no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_tasks(&self, task_list_id: TaskListId) -> TaskServiceResult<Vec<Task>> {
        let tasks = self
            .repository
            .find_tasks_by_task_list(task_list_id)
            .await?;
        debug!(task_list_id = %task_list_id, count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Creates an open task inside an existing task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the request carries an
    /// identifier or a blank title; [`TaskServiceError::TaskListNotFound`]
    /// when the task list does not exist; [`TaskServiceError::Repository`]
    /// when persistence fails.
    pub async fn create_task(
        &self,
        task_list_id: TaskListId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            id,
            title,
            description,
            due_date,
            priority,
        } = request;
        ensure_unassigned(EntityKind::Task, id.map(TaskId::into_inner))?;
        let validated_title = TaskTitle::new(title, EntityKind::Task)?;

        if self.repository.find_task_list(task_list_id).await?.is_none() {
            return Err(TaskServiceError::TaskListNotFound(task_list_id));
        }

        let data = NewTaskData {
            title: validated_title,
            description,
            due_date,
            priority,
        };
        let task = Task::new(task_list_id, data, &*self.clock);
        self.repository.store_task(&task).await?;
        info!(task_list_id = %task_list_id, task_id = %task.id(), "created task");
        Ok(task)
    }

    /// Retrieves a task scoped by its task list.
    ///
    /// Returns `Ok(None)` when the task does not exist or belongs to another
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get_task(
        &self,
        task_list_id: TaskListId,
        task_id: TaskId,
    ) -> TaskServiceResult<Option<Task>> {
        Ok(self
            .repository
            .find_task_in_list(task_list_id, task_id)
            .await?)
    }

    /// Replaces the mutable fields of a task.
    ///
    /// The owning task list and the creation timestamp never change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the payload identifier
    /// is missing or differs from `task_id`, the title is blank, or status
    /// or priority is missing; [`TaskServiceError::TaskNotFound`] when the
    /// task does not exist in the list; [`TaskServiceError::Repository`]
    /// when persistence fails.
    pub async fn update_task(
        &self,
        task_list_id: TaskListId,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let UpdateTaskRequest {
            id,
            title,
            description,
            due_date,
            status,
            priority,
        } = request;
        ensure_matching_id(
            EntityKind::Task,
            task_id.into_inner(),
            id.map(TaskId::into_inner),
        )?;
        let changes = TaskChanges {
            title: TaskTitle::new(title, EntityKind::Task)?,
            description,
            due_date,
            status: status.ok_or(TaskDomainError::MissingStatus)?,
            priority: priority.ok_or(TaskDomainError::MissingPriority)?,
        };

        let mut task = self
            .repository
            .find_task_in_list(task_list_id, task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound {
                task_list_id,
                task_id,
            })?;
        task.apply(changes, &*self.clock);
        self.repository.update_task(&task).await?;
        info!(
            task_list_id = %task_list_id,
            task_id = %task_id,
            status = task.status().as_str(),
            "updated task"
        );
        Ok(task)
    }

    /// Deletes a task scoped by its task list.
    ///
    /// Deleting an absent task succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete_task(
        &self,
        task_list_id: TaskListId,
        task_id: TaskId,
    ) -> TaskServiceResult<()> {
        self.repository
            .delete_task_in_list(task_list_id, task_id)
            .await?;
        info!(task_list_id = %task_list_id, task_id = %task_id, "deleted task");
        Ok(())
    }
}
