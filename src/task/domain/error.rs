//! Error types for task domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The task identifier could not be parsed as an integer.
    #[error("malformed task id '{0}'")]
    MalformedTaskId(String),
}
