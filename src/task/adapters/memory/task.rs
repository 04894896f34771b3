//! In-memory repository for task planning tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{PlanningDate, Task, TaskDraft, TaskId, TaskStatus},
    ports::{Pagination, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TextMatch},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned sequentially starting at 1 and are never
/// reused after deletion.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
    text_match: TextMatch,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    last_id: i64,
    tasks: BTreeMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository with substring search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text search semantics.
    #[must_use]
    pub const fn with_text_match(mut self, text_match: TextMatch) -> Self {
        self.text_match = text_match;
        self
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    /// Returns `true` when no task is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.read()?.tasks.is_empty())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Collects stored tasks matching `predicate` in identifier order.
fn collect_matching(state: &InMemoryTaskState, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
    state
        .tasks
        .values()
        .filter(|task| predicate(task))
        .cloned()
        .collect()
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| {
                TaskRepositoryError::persistence(std::io::Error::other("task id space exhausted"))
            })?;
        let id = TaskId::new(next).map_err(TaskRepositoryError::persistence)?;
        let task = Task::new(id, draft.clone());
        state.last_id = next;
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let state = self.read()?;
        state
            .tasks
            .get(&id)
            .cloned()
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn search_by_text(&self, text: &str) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let text_match = self.text_match;
        Ok(collect_matching(&state, |task| {
            text_match.matches(task.title(), text) || text_match.matches(task.description(), text)
        }))
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        *stored = Task::new(id, draft.clone());
        Ok(stored.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn list_by_status(
        &self,
        status: TaskStatus,
        page: Pagination,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.status() == status)
            .skip(to_usize(page.offset()))
            .take(to_usize(page.limit()))
            .cloned()
            .collect())
    }

    async fn list_by_date_and_status(
        &self,
        date: PlanningDate,
        status: TaskStatus,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(collect_matching(&state, |task| {
            task.planning_date() == date && task.status() == status
        }))
    }
}
