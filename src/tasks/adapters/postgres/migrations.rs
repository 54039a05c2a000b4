//! Embedded schema migrations.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::result::QueryResult;

/// SQL creating the `task_lists` and `tasks` tables.
pub const CREATE_TASK_LISTS_SQL: &str =
    include_str!("../../../../migrations/2026-10-17-000000_create_task_lists/up.sql");

/// Applies all schema migrations to the connected database.
///
/// Every statement is idempotent, so this is safe to run on each startup.
///
/// # Errors
///
/// Returns the Diesel error raised by the first failing statement.
pub fn apply_migrations(connection: &mut PgConnection) -> QueryResult<()> {
    connection.batch_execute(CREATE_TASK_LISTS_SQL)
}
