//! Task aggregate and the draft it is created from.

use super::{PlanningDate, TaskId};
use serde::{Deserialize, Serialize};

/// Completion status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work on the task is not finished.
    #[default]
    Open,
    /// The task has been completed.
    Done,
}

impl TaskStatus {
    /// Maps the boolean "done" flag used by storage and transport.
    #[must_use]
    pub const fn from_done(done: bool) -> Self {
        if done { Self::Done } else { Self::Open }
    }

    /// Returns `true` when the task is completed.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Done => "done",
        }
    }
}

impl From<bool> for TaskStatus {
    fn from(done: bool) -> Self {
        Self::from_done(done)
    }
}

/// Candidate task content that has not been assigned an identifier.
///
/// Drafts are what callers submit for creation and for full-replacement
/// updates. They are validated by
/// [`TaskValidator`](crate::task::validation::TaskValidator) before they
/// reach storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    title: String,
    description: String,
    planning_date: PlanningDate,
    status: TaskStatus,
}

impl TaskDraft {
    /// Creates an open draft with an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>, planning_date: PlanningDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            planning_date,
            status: TaskStatus::Open,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the completion status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the planning date.
    #[must_use]
    pub const fn planning_date(&self) -> PlanningDate {
        self.planning_date
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    content: TaskDraft,
}

impl Task {
    /// Binds draft content to the identifier storage assigned to it.
    #[must_use]
    pub const fn new(id: TaskId, content: TaskDraft) -> Self {
        Self { id, content }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task content without its identifier.
    #[must_use]
    pub const fn content(&self) -> &TaskDraft {
        &self.content
    }

    /// Consumes the task and returns its content.
    #[must_use]
    pub fn into_content(self) -> TaskDraft {
        self.content
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.content.title()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.content.description()
    }

    /// Returns the planning date.
    #[must_use]
    pub const fn planning_date(&self) -> PlanningDate {
        self.content.planning_date()
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.content.status()
    }
}
