//! Composite task validator.

use super::{TaskValidationConfig, TaskValidationError, TaskViolation, rules};
use crate::task::domain::{PlanningDate, TaskDraft};
use mockable::Clock;

/// Validates candidate tasks before they are persisted.
///
/// Applies every rule and collects all violations instead of stopping at
/// the first one. The validator is stateless apart from its limits.
///
/// # Examples
///
/// ```
/// use dayplanner::task::domain::{PlanningDate, TaskDraft};
/// use dayplanner::task::validation::{TaskValidator, TaskViolation};
///
/// let today = PlanningDate::new(2026, 3, 10);
/// let draft = TaskDraft::new("", PlanningDate::new(2026, 3, 9));
///
/// let violations = TaskValidator::new().violations(&draft, today);
/// assert!(violations.contains(&TaskViolation::NoTitle));
/// assert_eq!(violations.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskValidator {
    config: TaskValidationConfig,
}

impl TaskValidator {
    /// Creates a validator with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn with_config(config: TaskValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the validation limits.
    #[must_use]
    pub const fn config(&self) -> &TaskValidationConfig {
        &self.config
    }

    /// Returns every rule the draft violates, relative to `today`.
    ///
    /// An empty list means the draft is valid.
    #[must_use]
    pub fn violations(&self, draft: &TaskDraft, today: PlanningDate) -> Vec<TaskViolation> {
        [
            rules::validate_title(draft.title(), &self.config),
            rules::validate_description(draft.description(), &self.config),
            rules::validate_schedule(draft.planning_date(), today),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    /// Validates a draft against the current UTC date read from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] listing every violated rule.
    pub fn validate(
        &self,
        draft: &TaskDraft,
        clock: &impl Clock,
    ) -> Result<(), TaskValidationError> {
        let today = PlanningDate::from(clock.utc().date_naive());
        self.validate_at(draft, today)
    }

    /// Validates a draft against an explicit current date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] listing every violated rule.
    pub fn validate_at(
        &self,
        draft: &TaskDraft,
        today: PlanningDate,
    ) -> Result<(), TaskValidationError> {
        TaskValidationError::from_violations(self.violations(draft, today)).map_or(Ok(()), Err)
    }
}
