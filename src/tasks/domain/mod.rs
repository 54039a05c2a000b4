//! Domain model for task lists and tasks.
//!
//! Everything here is free of infrastructure concerns. Timestamps are taken
//! from an injected [`mockable::Clock`] so tests can control them.

mod error;
mod ids;
mod overview;
mod task;
mod task_list;
mod time;
mod title;

pub use error::{EntityKind, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskListId};
pub use overview::{TaskListOverview, progress};
pub use task::{NewTaskData, PersistedTaskData, Task, TaskChanges, TaskPriority, TaskStatus};
pub use task_list::{PersistedTaskListData, TaskList};
pub use time::to_stored_precision;
pub use title::TaskTitle;
