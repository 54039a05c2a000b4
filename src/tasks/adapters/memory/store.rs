//! In-memory store backing both task list and task repositories.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::tasks::{
    domain::{Task, TaskId, TaskList, TaskListId},
    ports::{TaskListRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory store for task lists and tasks.
///
/// Both repository ports share one lock so cascading deletes and parent
/// checks observe a consistent state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    task_lists: HashMap<TaskListId, TaskList>,
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Collects tasks matching the filter, ordered by creation time.
fn collect_tasks(state: &InMemoryTaskState, filter: impl Fn(&Task) -> bool) -> Vec<Task> {
    let mut tasks: Vec<Task> = state
        .tasks
        .values()
        .filter(|task| filter(task))
        .cloned()
        .collect();
    tasks.sort_by_key(|task| (task.created_at(), task.id()));
    tasks
}

#[async_trait]
impl TaskListRepository for InMemoryTaskStore {
    async fn list_task_lists(&self) -> TaskRepositoryResult<Vec<TaskList>> {
        let state = self.read()?;
        let mut task_lists: Vec<TaskList> = state.task_lists.values().cloned().collect();
        task_lists.sort_by_key(|task_list| (task_list.created_at(), task_list.id()));
        Ok(task_lists)
    }

    async fn find_task_list(&self, id: TaskListId) -> TaskRepositoryResult<Option<TaskList>> {
        let state = self.read()?;
        Ok(state.task_lists.get(&id).cloned())
    }

    async fn store_task_list(&self, task_list: &TaskList) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.task_lists.contains_key(&task_list.id()) {
            return Err(TaskRepositoryError::DuplicateTaskList(task_list.id()));
        }
        state.task_lists.insert(task_list.id(), task_list.clone());
        Ok(())
    }

    async fn update_task_list(&self, task_list: &TaskList) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .task_lists
            .get_mut(&task_list.id())
            .ok_or(TaskRepositoryError::TaskListNotFound(task_list.id()))?;
        *stored = task_list.clone();
        Ok(())
    }

    async fn delete_task_list(&self, id: TaskListId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state.tasks.retain(|_, task| task.task_list_id() != id);
        state.task_lists.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn find_task(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_tasks_by_task_list(
        &self,
        task_list_id: TaskListId,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(collect_tasks(&state, |task| {
            task.task_list_id() == task_list_id
        }))
    }

    async fn find_task_in_list(
        &self,
        task_list_id: TaskListId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .get(&id)
            .filter(|task| task.task_list_id() == task_list_id)
            .cloned())
    }

    async fn store_task(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.task_lists.contains_key(&task.task_list_id()) {
            return Err(TaskRepositoryError::TaskListNotFound(task.task_list_id()));
        }
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .filter(|stored| stored.task_list_id() == task.task_list_id())
            .ok_or(TaskRepositoryError::TaskNotFound {
                task_list_id: task.task_list_id(),
                task_id: task.id(),
            })?;
        *stored = task.clone();
        Ok(())
    }

    async fn delete_task_in_list(
        &self,
        task_list_id: TaskListId,
        id: TaskId,
    ) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let owned_by_list = state
            .tasks
            .get(&id)
            .is_some_and(|task| task.task_list_id() == task_list_id);
        if owned_by_list {
            state.tasks.remove(&id);
        }
        Ok(())
    }
}
