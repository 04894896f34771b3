//! Service layer sequencing validation and persistence for tasks.

use super::{InvalidInputError, TaskServiceError, TaskServiceResult};
use crate::task::{
    domain::{PlanningDate, Task, TaskDraft, TaskId, TaskStatus},
    ports::{Pagination, TaskRepository, TaskRepositoryError},
    validation::{TaskValidator, validate_date},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Task planning orchestration service.
///
/// Every operation is spelled out explicitly: mutating operations validate
/// the draft before storage is touched, input-shape checks reject requests
/// early, and repository failures are translated into
/// [`TaskServiceError`] kinds. The service holds no mutable state, so
/// concurrent calls need no locking here.
///
/// Operations are plain futures; dropping one cancels the call at its next
/// await point.
pub struct TaskPlannerService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    validator: TaskValidator,
}

impl<R, C> Clone for TaskPlannerService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            validator: self.validator.clone(),
        }
    }
}

impl<R, C> TaskPlannerService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with default validation limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            validator: TaskValidator::new(),
        }
    }

    /// Replaces the validator, e.g. to apply custom limits.
    #[must_use]
    pub fn with_validator(mut self, validator: TaskValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Returns the validator used for mutating operations.
    #[must_use]
    pub const fn validator(&self) -> &TaskValidator {
        &self.validator
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidTask`] when the draft violates
    /// any rule, or [`TaskServiceError::Storage`] when persistence fails.
    #[instrument(skip_all, fields(title = draft.title()))]
    pub async fn create_task(&self, draft: &TaskDraft) -> TaskServiceResult<Task> {
        self.check_draft(draft)?;
        let task = self
            .repository
            .create(draft)
            .await
            .map_err(repository_failure)?;
        debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Storage`] when persistence fails.
    #[instrument(skip(self))]
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(repository_failure)
    }

    /// Returns tasks whose title or description matches `text`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::EmptySearchText`] without querying
    /// storage when `text` is empty.
    #[instrument(skip(self))]
    pub async fn search_tasks(&self, text: &str) -> TaskServiceResult<Vec<Task>> {
        if text.is_empty() {
            debug!("rejected empty search text");
            return Err(InvalidInputError::EmptySearchText.into());
        }
        self.repository
            .search_by_text(text)
            .await
            .map_err(repository_failure)
    }

    /// Validates a draft and replaces every field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidTask`] when the draft violates
    /// any rule, [`TaskServiceError::NotFound`] when the task does not
    /// exist, or [`TaskServiceError::Storage`] when persistence fails.
    #[instrument(skip(self, draft), fields(title = draft.title()))]
    pub async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> TaskServiceResult<Task> {
        self.check_draft(draft)?;
        let task = self
            .repository
            .update(id, draft)
            .await
            .map_err(repository_failure)?;
        debug!("task updated");
        Ok(task)
    }

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Storage`] when persistence fails.
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(repository_failure)?;
        debug!("task deleted");
        Ok(())
    }

    /// Returns one page of tasks with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::NegativeLimit`] or
    /// [`InvalidInputError::NegativeOffset`] without querying storage, or
    /// [`TaskServiceError::Storage`] when persistence fails.
    #[instrument(skip(self))]
    pub async fn list_by_status(
        &self,
        status: TaskStatus,
        limit: i64,
        offset: i64,
    ) -> TaskServiceResult<Vec<Task>> {
        let page = pagination(limit, offset).inspect_err(|err| {
            debug!(error = %err, "rejected pagination");
        })?;
        self.repository
            .list_by_status(status, page)
            .await
            .map_err(repository_failure)
    }

    /// Returns all tasks planned for `date` with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::InvalidFilterDate`] without querying
    /// storage when `date` is not a calendar date, or
    /// [`TaskServiceError::Storage`] when persistence fails.
    #[instrument(skip(self))]
    pub async fn list_by_date_and_status(
        &self,
        date: PlanningDate,
        status: TaskStatus,
    ) -> TaskServiceResult<Vec<Task>> {
        validate_date(date).map_err(|err| {
            debug!(error = %err, "rejected filter date");
            InvalidInputError::InvalidFilterDate(err)
        })?;
        self.repository
            .list_by_date_and_status(date, status)
            .await
            .map_err(repository_failure)
    }

    fn check_draft(&self, draft: &TaskDraft) -> TaskServiceResult<()> {
        self.validator
            .validate(draft, &*self.clock)
            .map_err(|err| {
                debug!(error = %err, "rejected invalid task");
                TaskServiceError::InvalidTask(err)
            })
    }
}

fn pagination(limit: i64, offset: i64) -> Result<Pagination, InvalidInputError> {
    let checked_limit = u64::try_from(limit).map_err(|_| InvalidInputError::NegativeLimit(limit))?;
    let checked_offset =
        u64::try_from(offset).map_err(|_| InvalidInputError::NegativeOffset(offset))?;
    Ok(Pagination::new(checked_limit, checked_offset))
}

fn repository_failure(err: TaskRepositoryError) -> TaskServiceError {
    match &err {
        TaskRepositoryError::NotFound(id) => debug!(task_id = %id, "task not found"),
        TaskRepositoryError::Persistence(cause) => warn!(error = %cause, "task storage failed"),
    }
    TaskServiceError::from(err)
}
