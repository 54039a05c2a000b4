//! Port contracts for task list and task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the services.

pub mod repository;

pub use repository::{
    TaskListRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
