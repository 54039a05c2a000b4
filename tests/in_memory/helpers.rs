//! Shared fixtures for in-memory store integration tests.

use std::sync::Arc;

use crate::test_helpers::SteppingClock;
use rstest::fixture;
use tasklists::tasks::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskListId, TaskListOverview},
    services::{CreateTaskListRequest, TaskListService, TaskService},
};

/// Task list service over the in-memory store.
pub type TestTaskListService = TaskListService<InMemoryTaskStore, SteppingClock>;

/// Task service over the in-memory store.
pub type TestTaskService = TaskService<InMemoryTaskStore, SteppingClock>;

/// Both services sharing one store and one clock.
pub struct Services {
    /// Store shared by both services.
    pub store: Arc<InMemoryTaskStore>,
    /// Task list service.
    pub task_lists: TestTaskListService,
    /// Task service.
    pub tasks: TestTaskService,
}

/// Provides both services over a fresh store.
#[fixture]
pub fn services() -> Services {
    let store = Arc::new(InMemoryTaskStore::new());
    let clock = Arc::new(SteppingClock::new());
    Services {
        task_lists: TaskListService::new(Arc::clone(&store), Arc::clone(&clock)),
        tasks: TaskService::new(Arc::clone(&store), clock),
        store,
    }
}

/// Creates a task list with the given title and returns its identifier.
///
/// # Errors
///
/// Returns an error when the service rejects the request.
pub async fn create_task_list(
    services: &Services,
    title: &str,
) -> Result<TaskListId, eyre::Report> {
    let overview: TaskListOverview = services
        .task_lists
        .create_task_list(CreateTaskListRequest::new(title))
        .await?;
    Ok(overview.task_list().id())
}
