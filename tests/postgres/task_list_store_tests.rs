//! `PostgreSQL` integration tests for task list persistence.

use super::helpers::{StoreContext, context, create_task_list, delete_task_list_row};
use crate::test_helpers::SteppingClock;
use rstest::rstest;
use tasklists::tasks::{
    domain::{EntityKind, TaskList, TaskTitle},
    ports::{TaskListRepository, TaskRepository, TaskRepositoryError},
    services::{CreateTaskListRequest, CreateTaskRequest, UpdateTaskListRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_list_equals_fetched_task_list(
    context: eyre::Result<StoreContext>,
) -> eyre::Result<()> {
    let ctx = context?;
    let created = ctx
        .task_lists
        .create_task_list(CreateTaskListRequest::new("Groceries").with_description("weekly"))
        .await?;

    let fetched = ctx
        .task_lists
        .get_task_list(created.task_list().id())
        .await?;

    eyre::ensure!(
        fetched.as_ref() == Some(&created),
        "fetched {fetched:?}, created {created:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updated_task_list_equals_fetched_task_list(
    context: eyre::Result<StoreContext>,
) -> eyre::Result<()> {
    let ctx = context?;
    let id = create_task_list(&ctx, "Groceries").await?;

    let updated = ctx
        .task_lists
        .update_task_list(id, UpdateTaskListRequest::new("Market").with_id(id))
        .await?;
    let fetched = ctx.task_lists.get_task_list(id).await?;

    eyre::ensure!(
        fetched.as_ref() == Some(&updated),
        "fetched {fetched:?}, updated {updated:?}"
    );
    eyre::ensure!(updated.task_list().title().as_str() == "Market", "title not replaced");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_lists_are_listed_oldest_first(
    context: eyre::Result<StoreContext>,
) -> eyre::Result<()> {
    let ctx = context?;
    let clock = SteppingClock::new();
    let older = TaskList::new(TaskTitle::new("Older", EntityKind::TaskList)?, None, &clock);
    let newer = TaskList::new(TaskTitle::new("Newer", EntityKind::TaskList)?, None, &clock);
    ctx.store.store_task_list(&newer).await?;
    ctx.store.store_task_list(&older).await?;

    let listed = ctx.store.list_task_lists().await?;

    eyre::ensure!(listed == vec![older, newer], "unexpected order: {listed:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_task_list_is_rejected(context: eyre::Result<StoreContext>) -> eyre::Result<()> {
    let ctx = context?;
    let title = TaskTitle::new("Groceries", EntityKind::TaskList)?;
    let task_list = TaskList::new(title, None, &SteppingClock::new());
    ctx.store.store_task_list(&task_list).await?;

    let result = ctx.store.store_task_list(&task_list).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateTaskList(id)) if id == task_list.id()),
        "unexpected result: {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_task_list_removes_its_tasks(
    context: eyre::Result<StoreContext>,
) -> eyre::Result<()> {
    let ctx = context?;
    let id = create_task_list(&ctx, "Groceries").await?;
    let milk = ctx
        .tasks
        .create_task(id, CreateTaskRequest::new("Milk"))
        .await?;

    ctx.task_lists.delete_task_list(id).await?;

    eyre::ensure!(ctx.store.find_task_list(id).await?.is_none(), "list survived");
    eyre::ensure!(ctx.store.find_task(milk.id()).await?.is_none(), "task survived");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removing_task_list_row_cascades_to_its_tasks(
    context: eyre::Result<StoreContext>,
) -> eyre::Result<()> {
    let ctx = context?;
    let groceries = create_task_list(&ctx, "Groceries").await?;
    let chores = create_task_list(&ctx, "Chores").await?;
    let milk = ctx
        .tasks
        .create_task(groceries, CreateTaskRequest::new("Milk"))
        .await?;
    let laundry = ctx
        .tasks
        .create_task(chores, CreateTaskRequest::new("Laundry"))
        .await?;

    let deleted = delete_task_list_row(&ctx, groceries).await?;

    eyre::ensure!(deleted == 1, "expected one list row, deleted {deleted}");
    eyre::ensure!(ctx.store.find_task(milk.id()).await?.is_none(), "orphan task left behind");
    eyre::ensure!(
        ctx.store.find_task(laundry.id()).await?.as_ref() == Some(&laundry),
        "unrelated task was removed"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn migrations_can_be_reapplied(context: eyre::Result<StoreContext>) -> eyre::Result<()> {
    let ctx = context?;
    let id = create_task_list(&ctx, "Groceries").await?;

    ctx.store.migrate().await?;
    ctx.store.migrate().await?;

    eyre::ensure!(ctx.store.find_task_list(id).await?.is_some(), "existing rows were lost");
    Ok(())
}
