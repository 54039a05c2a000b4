//! `PostgreSQL` integration tests for task persistence.

use super::helpers::{StoreContext, context, create_task_list};
use crate::test_helpers::SteppingClock;
use chrono::{TimeZone, Timelike, Utc};
use mockable::DefaultClock;
use rstest::rstest;
use tasklists::tasks::{
    domain::{
        EntityKind, NewTaskData, PersistedTaskData, Task, TaskListId, TaskPriority, TaskStatus,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
};

fn new_task_data(title: &str) -> eyre::Result<NewTaskData> {
    Ok(NewTaskData {
        title: TaskTitle::new(title, EntityKind::Task)?,
        description: None,
        due_date: None,
        priority: None,
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_equals_fetched_task(context: eyre::Result<StoreContext>) -> eyre::Result<()> {
    let ctx = context?;
    let list_id = create_task_list(&ctx, "Groceries").await?;
    let due_date = Utc
        .timestamp_opt(1_790_000_000, 123_456_789)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid due date"))?;

    let created = ctx
        .tasks
        .create_task(
            list_id,
            CreateTaskRequest::new("Milk")
                .with_description("semi-skimmed")
                .with_due_date(due_date)
                .with_priority(TaskPriority::High),
        )
        .await?;
    let fetched = ctx.tasks.get_task(list_id, created.id()).await?;

    eyre::ensure!(
        fetched.as_ref() == Some(&created),
        "fetched {fetched:?}, created {created:?}"
    );
    let stored_nanos = created.due_date().map(|due| due.nanosecond());
    eyre::ensure!(stored_nanos == Some(123_456_000), "due date kept {stored_nanos:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updated_task_equals_fetched_task(context: eyre::Result<StoreContext>) -> eyre::Result<()> {
    let ctx = context?;
    let list_id = create_task_list(&ctx, "Groceries").await?;
    let milk = ctx
        .tasks
        .create_task(list_id, CreateTaskRequest::new("Milk"))
        .await?;

    let updated = ctx
        .tasks
        .update_task(
            list_id,
            milk.id(),
            UpdateTaskRequest::new("Oat milk")
                .with_id(milk.id())
                .with_status(TaskStatus::Closed)
                .with_priority(TaskPriority::Low),
        )
        .await?;
    let fetched = ctx.tasks.get_task(list_id, milk.id()).await?;

    eyre::ensure!(
        fetched.as_ref() == Some(&updated),
        "fetched {fetched:?}, updated {updated:?}"
    );
    eyre::ensure!(updated.created_at() == milk.created_at(), "created_at changed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_for_missing_task_list_is_rejected(
    context: eyre::Result<StoreContext>,
) -> eyre::Result<()> {
    let ctx = context?;
    let missing = TaskListId::new();
    let task = Task::new(missing, new_task_data("Milk")?, &DefaultClock);

    let result = ctx.store.store_task(&task).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::TaskListNotFound(id)) if id == missing),
        "unexpected result: {result:?}"
    );
    eyre::ensure!(ctx.store.find_task(task.id()).await?.is_none(), "dangling task stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_update_through_another_list_is_not_found(
    context: eyre::Result<StoreContext>,
) -> eyre::Result<()> {
    let ctx = context?;
    let groceries = create_task_list(&ctx, "Groceries").await?;
    let chores = create_task_list(&ctx, "Chores").await?;
    let milk = ctx
        .tasks
        .create_task(groceries, CreateTaskRequest::new("Milk"))
        .await?;
    let misaddressed = Task::from_persisted(PersistedTaskData {
        id: milk.id(),
        task_list_id: chores,
        title: milk.title().clone(),
        description: None,
        due_date: None,
        status: TaskStatus::Closed,
        priority: milk.priority(),
        created_at: milk.created_at(),
        updated_at: milk.updated_at(),
    });

    let result = ctx.store.update_task(&misaddressed).await;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskRepositoryError::TaskNotFound { task_list_id, task_id })
                if task_list_id == chores && task_id == milk.id()
        ),
        "unexpected result: {result:?}"
    );
    let stored = ctx.tasks.get_task(groceries, milk.id()).await?;
    eyre::ensure!(stored.as_ref() == Some(&milk), "task changed: {stored:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn service_update_through_another_list_is_not_found(
    context: eyre::Result<StoreContext>,
) -> eyre::Result<()> {
    let ctx = context?;
    let groceries = create_task_list(&ctx, "Groceries").await?;
    let chores = create_task_list(&ctx, "Chores").await?;
    let milk = ctx
        .tasks
        .create_task(groceries, CreateTaskRequest::new("Milk"))
        .await?;

    let result = ctx
        .tasks
        .update_task(
            chores,
            milk.id(),
            UpdateTaskRequest::new("Milk")
                .with_id(milk.id())
                .with_status(TaskStatus::Closed)
                .with_priority(TaskPriority::Medium),
        )
        .await;

    eyre::ensure!(
        matches!(result, Err(TaskServiceError::TaskNotFound { task_list_id, .. }) if task_list_id == chores),
        "unexpected result: {result:?}"
    );
    eyre::ensure!(
        ctx.tasks.list_tasks(chores).await?.is_empty(),
        "task created in the wrong list"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_through_another_list_keeps_task(
    context: eyre::Result<StoreContext>,
) -> eyre::Result<()> {
    let ctx = context?;
    let groceries = create_task_list(&ctx, "Groceries").await?;
    let chores = create_task_list(&ctx, "Chores").await?;
    let milk = ctx
        .tasks
        .create_task(groceries, CreateTaskRequest::new("Milk"))
        .await?;

    ctx.tasks.delete_task(chores, milk.id()).await?;

    eyre::ensure!(
        ctx.tasks.get_task(groceries, milk.id()).await?.is_some(),
        "task deleted through another list"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_are_listed_oldest_first(context: eyre::Result<StoreContext>) -> eyre::Result<()> {
    let ctx = context?;
    let list_id = create_task_list(&ctx, "Groceries").await?;
    let clock = SteppingClock::new();
    let first = Task::new(list_id, new_task_data("Milk")?, &clock);
    let second = Task::new(list_id, new_task_data("Bread")?, &clock);
    ctx.store.store_task(&second).await?;
    ctx.store.store_task(&first).await?;

    let listed = ctx.store.find_tasks_by_task_list(list_id).await?;

    eyre::ensure!(listed == vec![first, second], "unexpected order: {listed:?}");
    Ok(())
}
