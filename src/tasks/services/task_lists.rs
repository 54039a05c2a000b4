//! Service layer for task list creation, retrieval, update and deletion.

use super::{
    error::{TaskServiceError, TaskServiceResult},
    validation::{ensure_matching_id, ensure_unassigned},
};
use crate::tasks::{
    domain::{EntityKind, TaskList, TaskListId, TaskListOverview, TaskTitle},
    ports::{TaskListRepository, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for creating a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskListRequest {
    id: Option<TaskListId>,
    title: String,
    description: Option<String>,
}

impl CreateTaskListRequest {
    /// Creates a request with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Carries a client-supplied identifier, which creation rejects.
    #[must_use]
    pub const fn with_id(mut self, id: TaskListId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Request payload for updating a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskListRequest {
    id: Option<TaskListId>,
    title: String,
    description: Option<String>,
}

impl UpdateTaskListRequest {
    /// Creates a request replacing the title; the description is cleared
    /// unless set with [`Self::with_description`].
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
        }
    }

    /// Sets the identifier of the task list being updated.
    #[must_use]
    pub const fn with_id(mut self, id: TaskListId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Task list orchestration service.
#[derive(Clone)]
pub struct TaskListService<R, C>
where
    R: TaskListRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskListService<R, C>
where
    R: TaskListRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task list together with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_task_lists(&self) -> TaskServiceResult<Vec<TaskListOverview>> {
        let task_lists = self.repository.list_task_lists().await?;
        let mut overviews = Vec::with_capacity(task_lists.len());
        for task_list in task_lists {
            overviews.push(self.load_overview(task_list).await?);
        }
        debug!(count = overviews.len(), "listed task lists");
        Ok(overviews)
    }

    /// Creates a new, empty task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the request carries an
    /// identifier or a blank title, or [`TaskServiceError::Repository`] when
    /// the store rejects persistence.
    pub async fn create_task_list(
        &self,
        request: CreateTaskListRequest,
    ) -> TaskServiceResult<TaskListOverview> {
        let CreateTaskListRequest {
            id,
            title,
            description,
        } = request;
        ensure_unassigned(EntityKind::TaskList, id.map(TaskListId::into_inner))?;
        let validated_title = TaskTitle::new(title, EntityKind::TaskList)?;

        let task_list = TaskList::new(validated_title, description, &*self.clock);
        self.repository.store_task_list(&task_list).await?;
        info!(task_list_id = %task_list.id(), "created task list");
        Ok(TaskListOverview::new(task_list, Vec::new()))
    }

    /// Retrieves a task list with its tasks.
    ///
    /// Returns `Ok(None)` when the task list does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get_task_list(&self, id: TaskListId) -> TaskServiceResult<Option<TaskListOverview>> {
        let Some(task_list) = self.repository.find_task_list(id).await? else {
            debug!(task_list_id = %id, "task list not found");
            return Ok(None);
        };
        Ok(Some(self.load_overview(task_list).await?))
    }

    /// Replaces the title and description of an existing task list.
    ///
    /// Tasks and the creation timestamp are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the payload identifier
    /// is missing or differs from `id`, or the title is blank;
    /// [`TaskServiceError::TaskListNotFound`] when no task list exists for
    /// `id`; [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update_task_list(
        &self,
        id: TaskListId,
        request: UpdateTaskListRequest,
    ) -> TaskServiceResult<TaskListOverview> {
        let UpdateTaskListRequest {
            id: body_id,
            title,
            description,
        } = request;
        ensure_matching_id(
            EntityKind::TaskList,
            id.into_inner(),
            body_id.map(TaskListId::into_inner),
        )?;
        let validated_title = TaskTitle::new(title, EntityKind::TaskList)?;

        let mut task_list = self
            .repository
            .find_task_list(id)
            .await?
            .ok_or(TaskServiceError::TaskListNotFound(id))?;
        task_list.revise(validated_title, description, &*self.clock);
        self.repository.update_task_list(&task_list).await?;
        info!(task_list_id = %id, "updated task list");
        self.load_overview(task_list).await
    }

    /// Deletes a task list and every task it owns.
    ///
    /// Deleting an absent task list succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete_task_list(&self, id: TaskListId) -> TaskServiceResult<()> {
        self.repository.delete_task_list(id).await?;
        info!(task_list_id = %id, "deleted task list");
        Ok(())
    }

    async fn load_overview(&self, task_list: TaskList) -> TaskServiceResult<TaskListOverview> {
        let tasks = self
            .repository
            .find_tasks_by_task_list(task_list.id())
            .await?;
        Ok(TaskListOverview::new(task_list, tasks))
    }
}
