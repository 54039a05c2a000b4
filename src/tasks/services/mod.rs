//! Application services for task list and task management.

mod error;
mod task_lists;
mod tasks;
mod validation;

pub use error::{TaskServiceError, TaskServiceResult};
pub use task_lists::{CreateTaskListRequest, TaskListService, UpdateTaskListRequest};
pub use tasks::{CreateTaskRequest, TaskService, UpdateTaskRequest};
