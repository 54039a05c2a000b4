//! Read model pairing a task list with its tasks.

use super::{Task, TaskList};

/// Fraction of tasks that are closed.
///
/// An empty collection has a progress of `0.0`.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "task counts stay far below 2^52 and progress is a ratio by definition"
)]
pub fn progress(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let closed = tasks.iter().filter(|task| task.is_closed()).count();
    closed as f64 / tasks.len() as f64
}

/// A task list together with the tasks it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListOverview {
    task_list: TaskList,
    tasks: Vec<Task>,
}

impl TaskListOverview {
    /// Pairs a task list with its tasks.
    #[must_use]
    pub const fn new(task_list: TaskList, tasks: Vec<Task>) -> Self {
        Self { task_list, tasks }
    }

    /// Returns the task list.
    #[must_use]
    pub const fn task_list(&self) -> &TaskList {
        &self.task_list
    }

    /// Returns the tasks owned by the list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks owned by the list.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the fraction of closed tasks, see [`progress`].
    #[must_use]
    pub fn progress(&self) -> f64 {
        progress(&self.tasks)
    }

    /// Splits the overview into its parts.
    #[must_use]
    pub fn into_parts(self) -> (TaskList, Vec<Task>) {
        (self.task_list, self.tasks)
    }
}
