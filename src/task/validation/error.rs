//! Error types for task validation.
//!
//! Each violated rule is a distinct [`TaskViolation`] variant so callers can
//! branch on the exact failure instead of matching message text.

use crate::task::domain::PlanningDate;
use thiserror::Error;

/// Reasons a planning date is not a real calendar date.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlanningDateError {
    /// The year is zero or negative.
    #[error("year {0} is not positive")]
    NonPositiveYear(i32),

    /// The month is outside 1 to 12.
    #[error("month {0} is out of range 1-12")]
    MonthOutOfRange(u32),

    /// The year lies past the last supported calendar date.
    #[error("year {0} is beyond the supported calendar")]
    YearOutOfRange(i32),

    /// The day does not exist in the given month.
    #[error("day {day} is out of range 1-{max}")]
    DayOutOfRange {
        /// The rejected day.
        day: u32,
        /// Number of days in the month.
        max: u32,
    },
}

/// A single task-field rule that a candidate task violates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskViolation {
    /// The title is empty.
    #[error("no title of the task")]
    NoTitle,

    /// The title exceeds the configured character limit.
    #[error("title of the task has {actual} characters, exceeds limit of {max}")]
    TitleTooLong {
        /// Configured maximum.
        max: usize,
        /// Actual character count.
        actual: usize,
    },

    /// The description exceeds the configured character limit.
    #[error("description of the task has {actual} characters, exceeds limit of {max}")]
    DescriptionTooLong {
        /// Configured maximum.
        max: usize,
        /// Actual character count.
        actual: usize,
    },

    /// The planning date is not a calendar date.
    #[error("planning date is invalid: {0}")]
    DateInvalid(PlanningDateError),

    /// The planning date lies before the current date.
    #[error("planning date {date} is expired, today is {today}")]
    DateExpired {
        /// The rejected planning date.
        date: PlanningDate,
        /// The current date used for the comparison.
        today: PlanningDate,
    },
}

/// Aggregated validation failure carrying every violated rule.
///
/// The violation list is never empty.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("task fields are invalid: {}", format_violations(.violations))]
pub struct TaskValidationError {
    violations: Vec<TaskViolation>,
}

impl TaskValidationError {
    /// Wraps a list of violations.
    ///
    /// Returns `None` when the list is empty, since an empty list means the
    /// task is valid.
    #[must_use]
    pub fn from_violations(violations: Vec<TaskViolation>) -> Option<Self> {
        if violations.is_empty() {
            return None;
        }
        Some(Self { violations })
    }

    /// Returns the violated rules in reporting order.
    #[must_use]
    pub fn violations(&self) -> &[TaskViolation] {
        &self.violations
    }

    /// Returns `true` when the given violation was reported.
    #[must_use]
    pub fn contains(&self, violation: &TaskViolation) -> bool {
        self.violations.contains(violation)
    }

    /// Consumes the error and returns the violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<TaskViolation> {
        self.violations
    }
}

fn format_violations(violations: &[TaskViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
