//! In-memory integration tests for task operations.

use super::helpers::{Services, create_task_list, services};
use rstest::rstest;
use tasklists::tasks::{
    domain::{TaskId, TaskPriority, TaskStatus},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_equals_fetched_task(services: Services) -> Result<(), eyre::Report> {
    let list_id = create_task_list(&services, "Groceries").await?;
    let created = services
        .tasks
        .create_task(
            list_id,
            CreateTaskRequest::new("Milk").with_priority(TaskPriority::Low),
        )
        .await?;

    let fetched = services.tasks.get_task(list_id, created.id()).await?;

    eyre::ensure!(fetched.as_ref() == Some(&created), "fetched task differs");
    eyre::ensure!(created.status() == TaskStatus::Open, "new task must be open");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_are_isolated_between_lists(services: Services) -> Result<(), eyre::Report> {
    let groceries = create_task_list(&services, "Groceries").await?;
    let chores = create_task_list(&services, "Chores").await?;
    let milk = services
        .tasks
        .create_task(groceries, CreateTaskRequest::new("Milk"))
        .await?;
    services
        .tasks
        .create_task(chores, CreateTaskRequest::new("Laundry"))
        .await?;

    let grocery_tasks = services.tasks.list_tasks(groceries).await?;

    eyre::ensure!(grocery_tasks == vec![milk.clone()], "unexpected tasks: {grocery_tasks:?}");
    eyre::ensure!(
        services.tasks.get_task(chores, milk.id()).await?.is_none(),
        "task leaked into another list"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_through_the_wrong_list_is_not_found(
    services: Services,
) -> Result<(), eyre::Report> {
    let groceries = create_task_list(&services, "Groceries").await?;
    let chores = create_task_list(&services, "Chores").await?;
    let milk = services
        .tasks
        .create_task(groceries, CreateTaskRequest::new("Milk"))
        .await?;

    let result = services
        .tasks
        .update_task(
            chores,
            milk.id(),
            UpdateTaskRequest::new("Milk")
                .with_id(milk.id())
                .with_status(TaskStatus::Closed)
                .with_priority(TaskPriority::High),
        )
        .await;

    eyre::ensure!(
        matches!(result, Err(TaskServiceError::TaskNotFound { .. })),
        "expected task not found, got {result:?}"
    );
    let stored = services
        .store
        .find_task(milk.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should still exist"))?;
    eyre::ensure!(stored == milk, "task changed through another list");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn progress_tracks_closed_tasks(services: Services) -> Result<(), eyre::Report> {
    let list_id = create_task_list(&services, "Groceries").await?;
    let mut ids: Vec<TaskId> = Vec::new();
    for title in ["Milk", "Bread", "Eggs", "Butter"] {
        let task = services
            .tasks
            .create_task(list_id, CreateTaskRequest::new(title))
            .await?;
        ids.push(task.id());
    }

    for task_id in ids.iter().take(3).copied() {
        services
            .tasks
            .update_task(
                list_id,
                task_id,
                UpdateTaskRequest::new("done")
                    .with_id(task_id)
                    .with_status(TaskStatus::Closed)
                    .with_priority(TaskPriority::Medium),
            )
            .await?;
    }

    let overview = services
        .task_lists
        .get_task_list(list_id)
        .await?
        .ok_or_else(|| eyre::eyre!("task list should exist"))?;
    eyre::ensure!(overview.task_count() == 4, "expected four tasks");
    eyre::ensure!(
        (overview.progress() - 0.75).abs() < f64::EPSILON,
        "unexpected progress {}",
        overview.progress()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_gone(services: Services) -> Result<(), eyre::Report> {
    let list_id = create_task_list(&services, "Groceries").await?;
    let milk = services
        .tasks
        .create_task(list_id, CreateTaskRequest::new("Milk"))
        .await?;

    services.tasks.delete_task(list_id, milk.id()).await?;

    eyre::ensure!(
        services.tasks.get_task(list_id, milk.id()).await?.is_none(),
        "task survived deletion"
    );
    Ok(())
}
