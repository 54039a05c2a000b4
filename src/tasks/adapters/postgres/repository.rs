//! `PostgreSQL` store implementing both task list and task repositories.

use super::{
    migrations::apply_migrations,
    models::{TaskChangeset, TaskListChangeset, TaskListRow, TaskRow},
    schema::{task_lists, tasks},
};
use crate::tasks::{
    domain::{
        EntityKind, PersistedTaskData, PersistedTaskListData, Task, TaskId, TaskList, TaskListId,
        TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskListRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the task store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for the given database URL.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the pool cannot open
/// its initial connections.
pub fn build_pool(database_url: &str, max_connections: u32) -> TaskRepositoryResult<TaskPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_connections)
        .build(manager)
        .map_err(TaskRepositoryError::persistence)
}

/// `PostgreSQL`-backed store for task lists and tasks.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Creates the task tables when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when a migration
    /// statement fails.
    pub async fn migrate(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            apply_migrations(connection).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskListRepository for PostgresTaskStore {
    async fn list_task_lists(&self) -> TaskRepositoryResult<Vec<TaskList>> {
        self.run_blocking(|connection| {
            let rows = task_lists::table
                .order((task_lists::created_at.asc(), task_lists::id.asc()))
                .select(TaskListRow::as_select())
                .load::<TaskListRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task_list).collect()
        })
        .await
    }

    async fn find_task_list(&self, id: TaskListId) -> TaskRepositoryResult<Option<TaskList>> {
        self.run_blocking(move |connection| {
            let row = task_lists::table
                .find(id.into_inner())
                .select(TaskListRow::as_select())
                .first::<TaskListRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task_list).transpose()
        })
        .await
    }

    async fn store_task_list(&self, task_list: &TaskList) -> TaskRepositoryResult<()> {
        let task_list_id = task_list.id();
        let new_row = to_task_list_row(task_list);

        self.run_blocking(move |connection| {
            diesel::insert_into(task_lists::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTaskList(task_list_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_task_list(&self, task_list: &TaskList) -> TaskRepositoryResult<()> {
        let task_list_id = task_list.id();
        let changeset = TaskListChangeset {
            title: task_list.title().as_str().to_owned(),
            description: task_list.description().map(str::to_owned),
            updated_at: task_list.updated_at(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(task_lists::table.find(task_list_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::TaskListNotFound(task_list_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_task_list(&self, id: TaskListId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection
                .transaction::<_, DieselError, _>(|tx| {
                    diesel::delete(tasks::table.filter(tasks::task_list_id.eq(id.into_inner())))
                        .execute(tx)?;
                    diesel::delete(task_lists::table.find(id.into_inner())).execute(tx)?;
                    Ok(())
                })
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskStore {
    async fn find_task(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_tasks_by_task_list(
        &self,
        task_list_id: TaskListId,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::task_list_id.eq(task_list_id.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_task_in_list(
        &self,
        task_list_id: TaskListId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .filter(tasks::task_list_id.eq(task_list_id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn store_task(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let task_list_id = task.task_list_id();
        let new_row = to_task_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TaskRepositoryError::TaskListNotFound(task_list_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_task(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let task_list_id = task.task_list_id();
        let changeset = TaskChangeset {
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            updated_at: task.updated_at(),
        };

        self.run_blocking(move |connection| {
            let target = tasks::table
                .filter(tasks::id.eq(task_id.into_inner()))
                .filter(tasks::task_list_id.eq(task_list_id.into_inner()));
            let affected = diesel::update(target)
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::TaskNotFound {
                    task_list_id,
                    task_id,
                });
            }
            Ok(())
        })
        .await
    }

    async fn delete_task_in_list(
        &self,
        task_list_id: TaskListId,
        id: TaskId,
    ) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let target = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .filter(tasks::task_list_id.eq(task_list_id.into_inner()));
            diesel::delete(target)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_task_list_row(task_list: &TaskList) -> TaskListRow {
    TaskListRow {
        id: task_list.id().into_inner(),
        title: task_list.title().as_str().to_owned(),
        description: task_list.description().map(str::to_owned),
        created_at: task_list.created_at(),
        updated_at: task_list.updated_at(),
    }
}

fn row_to_task_list(row: TaskListRow) -> TaskRepositoryResult<TaskList> {
    let TaskListRow {
        id,
        title,
        description,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTaskListData {
        id: TaskListId::from_uuid(id),
        title: TaskTitle::new(title, EntityKind::TaskList)
            .map_err(TaskRepositoryError::persistence)?,
        description,
        created_at,
        updated_at,
    };
    Ok(TaskList::from_persisted(data))
}

fn to_task_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id().into_inner(),
        task_list_id: task.task_list_id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        due_date: task.due_date(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        task_list_id,
        title,
        description,
        due_date,
        status: persisted_status,
        priority: persisted_priority,
        created_at,
        updated_at,
    } = row;

    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        task_list_id: TaskListId::from_uuid(task_list_id),
        title: TaskTitle::new(title, EntityKind::Task).map_err(TaskRepositoryError::persistence)?,
        description,
        due_date,
        status,
        priority,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
