//! Error types for task list and task validation.

use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Entity addressed by a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A task list.
    TaskList,
    /// A task inside a task list.
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaskList => f.write_str("task list"),
            Self::Task => f.write_str("task"),
        }
    }
}

/// Validation errors raised while creating or updating task lists and tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A create request carried a client-supplied identifier.
    #[error("{0} must not have an id when it is created")]
    IdAssigned(EntityKind),

    /// An update request did not carry the identifier being updated.
    #[error("{0} must have an id when it is updated")]
    MissingId(EntityKind),

    /// The identifier in the payload differs from the addressed one.
    #[error("{entity} id {body} does not match the addressed id {path}")]
    IdMismatch {
        /// Entity being updated.
        entity: EntityKind,
        /// Identifier taken from the request path.
        path: Uuid,
        /// Identifier carried by the payload.
        body: Uuid,
    },

    /// The title is missing or empty after trimming.
    #[error("{0} title must not be empty")]
    EmptyTitle(EntityKind),

    /// A task update omitted the status.
    #[error("task status must not be null")]
    MissingStatus,

    /// A task update omitted the priority.
    #[error("task priority must not be null")]
    MissingPriority,
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
