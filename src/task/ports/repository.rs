//! Repository port for task persistence and lookup.

use crate::task::domain::{PlanningDate, Task, TaskDraft, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations own identifier assignment and any serialisation of
/// concurrent writes to the same task; callers get last-write-wins
/// semantics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage fails.
    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Loads a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task>;

    /// Returns tasks whose title or description matches `text`.
    ///
    /// Matching is case-insensitive; whether `text` must be a prefix or may
    /// occur anywhere is chosen by the implementation's [`TextMatch`].
    async fn search_by_text(&self, text: &str) -> TaskRepositoryResult<Vec<Task>>;

    /// Replaces every mutable field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task was updated.
    async fn update(&self, id: TaskId, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task was deleted.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns one page of tasks with the given status, ordered by id.
    async fn list_by_status(
        &self,
        status: TaskStatus,
        page: Pagination,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks planned for `date` with the given status, ordered
    /// by id.
    async fn list_by_date_and_status(
        &self,
        date: PlanningDate,
        status: TaskStatus,
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Text search semantics applied by a repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextMatch {
    /// Title or description must start with the search text.
    Prefix,
    /// Search text may occur anywhere in title or description.
    #[default]
    Contains,
}

impl TextMatch {
    /// Returns `true` when `haystack` matches `needle` under these
    /// semantics, ignoring case.
    #[must_use]
    pub fn matches(self, haystack: &str, needle: &str) -> bool {
        let folded_haystack = haystack.to_lowercase();
        let folded_needle = needle.to_lowercase();
        match self {
            Self::Prefix => folded_haystack.starts_with(&folded_needle),
            Self::Contains => folded_haystack.contains(&folded_needle),
        }
    }
}

/// Non-negative page window for listing queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    limit: u64,
    offset: u64,
}

impl Pagination {
    /// Creates a page window of at most `limit` tasks after skipping
    /// `offset` tasks.
    #[must_use]
    pub const fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Returns the maximum number of tasks in the page.
    #[must_use]
    pub const fn limit(self) -> u64 {
        self.limit
    }

    /// Returns the number of tasks skipped before the page.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.offset
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
