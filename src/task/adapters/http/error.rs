//! Mapping of service errors onto HTTP responses.

use super::dto::Envelope;
use crate::task::{domain::TaskDomainError, services::TaskServiceError};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

const STORAGE_FAILURE_MESSAGE: &str = "something went wrong with task storage";

/// Errors surfaced by task API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be parsed.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The planner service rejected the operation.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_)
            | Self::Service(
                TaskServiceError::InvalidInput(_) | TaskServiceError::InvalidTask(_),
            ) => StatusCode::BAD_REQUEST,
            Self::Service(TaskServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(TaskServiceError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message safe to show to clients.
    ///
    /// Storage causes are never included.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Service(TaskServiceError::Storage(_)) => STORAGE_FAILURE_MESSAGE.to_owned(),
            other => other.to_string(),
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self::MalformedRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Service(TaskServiceError::Storage(cause)) = &self {
            tracing::error!(error = %cause, "task request failed in storage");
        }
        let body = Envelope::<()>::failure(self.public_message());
        (status, Json(body)).into_response()
    }
}
