//! JSON request and response shapes for the task API.

use crate::task::domain::{PlanningDate, Task, TaskDraft, TaskStatus};
use serde::{Deserialize, Serialize};

/// Page size used when a listing request omits `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Calendar date as exchanged over JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningDateDto {
    /// Day of the month.
    pub day: u32,
    /// Month (1 = January).
    pub month: u32,
    /// Year.
    pub year: i32,
}

impl From<PlanningDateDto> for PlanningDate {
    fn from(dto: PlanningDateDto) -> Self {
        Self::new(dto.year, dto.month, dto.day)
    }
}

impl From<PlanningDate> for PlanningDateDto {
    fn from(date: PlanningDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    /// Task title.
    pub title: String,
    /// Task description; empty when omitted.
    #[serde(default)]
    pub description: String,
    /// Planned date.
    pub planning_date: PlanningDateDto,
    /// Completion flag; `false` when omitted.
    #[serde(default)]
    pub status: bool,
}

impl TaskPayload {
    /// Converts the payload into a draft for the planner service.
    #[must_use]
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft::new(self.title, self.planning_date.into())
            .with_description(self.description)
            .with_status(TaskStatus::from_done(self.status))
    }
}

/// Task as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Planned date.
    pub planning_date: PlanningDateDto,
    /// Completion flag.
    pub status: bool,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        let id = task.id().value();
        let content = task.into_content();
        Self {
            id,
            planning_date: content.planning_date().into(),
            status: content.status().is_done(),
            title: content.title().to_owned(),
            description: content.description().to_owned(),
        }
    }
}

/// Response envelope carrying either a payload or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Successful payload.
    pub data: Option<T>,
    /// Error message.
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Creates an envelope without payload or error.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }

    /// Wraps an error message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Query string of the text search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Text to look for in titles and descriptions.
    #[serde(default)]
    pub text: String,
}

/// Query string of the status listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    /// Completion flag to filter by.
    #[serde(default)]
    pub status: bool,
    /// Maximum number of tasks to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of tasks to skip.
    #[serde(default)]
    pub offset: i64,
}

/// Query string of the date listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DateStatusQuery {
    /// Year of the planning date.
    pub year: i32,
    /// Month of the planning date.
    pub month: u32,
    /// Day of the planning date.
    pub day: u32,
    /// Completion flag to filter by.
    #[serde(default)]
    pub status: bool,
}

impl DateStatusQuery {
    /// Returns the requested planning date.
    #[must_use]
    pub const fn planning_date(&self) -> PlanningDate {
        PlanningDate::new(self.year, self.month, self.day)
    }
}

const fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}
