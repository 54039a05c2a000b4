//! Mapping of service failures onto HTTP responses.

use crate::tasks::{ports::TaskRepositoryError, services::TaskServiceError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code.
    pub status: u16,
    /// Human-readable description.
    pub message: String,
    /// Stable machine-readable error kind.
    pub error: String,
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A service operation failed.
    #[error(transparent)]
    Service(#[from] TaskServiceError),

    /// The request body was not valid JSON for the endpoint.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// A path segment could not be parsed into an identifier.
    #[error("malformed request path: {0}")]
    MalformedPath(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedPath(rejection.body_text())
    }
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_)
            | Self::MalformedPath(_)
            | Self::Service(TaskServiceError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(
                TaskServiceError::TaskListNotFound(_) | TaskServiceError::TaskNotFound { .. },
            ) => StatusCode::NOT_FOUND,
            Self::Service(TaskServiceError::Repository(
                TaskRepositoryError::DuplicateTaskList(_) | TaskRepositoryError::DuplicateTask(_),
            )) => StatusCode::CONFLICT,
            Self::Service(TaskServiceError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the stable error kind reported in [`ErrorResponse::error`].
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedBody(_) | Self::MalformedPath(_) => "malformed_request",
            Self::Service(TaskServiceError::Validation(_)) => "validation_error",
            Self::Service(
                TaskServiceError::TaskListNotFound(_) | TaskServiceError::TaskNotFound { .. },
            ) => "not_found",
            Self::Service(TaskServiceError::Repository(
                TaskRepositoryError::DuplicateTaskList(_) | TaskRepositoryError::DuplicateTask(_),
            )) => "conflict",
            Self::Service(TaskServiceError::Repository(_)) => "storage_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!(error = %self, "store failure while handling request");
            "internal storage failure".to_owned()
        } else {
            self.to_string()
        };
        let body = ErrorResponse {
            status: status.as_u16(),
            message,
            error: self.kind().to_owned(),
        };
        (status, Json(body)).into_response()
    }
}
