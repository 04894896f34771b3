//! Error types returned by task planning services.

use crate::task::{
    domain::TaskId,
    ports::TaskRepositoryError,
    validation::{PlanningDateError, TaskValidationError},
};
use std::sync::Arc;
use thiserror::Error;

/// Caller input rejected before it reaches storage.
///
/// These constraints concern request shape rather than task fields.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A text search was requested with empty text.
    #[error("search text must not be empty")]
    EmptySearchText,

    /// A listing was requested with a negative limit.
    #[error("limit {0} must not be negative")]
    NegativeLimit(i64),

    /// A listing was requested with a negative offset.
    #[error("offset {0} must not be negative")]
    NegativeOffset(i64),

    /// A listing was filtered by a date that does not exist.
    #[error("filter date is invalid: {0}")]
    InvalidFilterDate(PlanningDateError),
}

/// Service-level errors for task planning operations.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// Caller input was malformed or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// One or more task fields violate validation rules.
    #[error(transparent)]
    InvalidTask(#[from] TaskValidationError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage failed; the cause is kept as the error source only.
    #[error("task storage failure")]
    Storage(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::Persistence(cause) => Self::Storage(cause),
        }
    }
}

/// Result type for task planning service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
