//! Task validation.
//!
//! Rules are pure functions in [`rules`]; [`TaskValidator`] combines them
//! into a single pass that reports every violation at once.

mod config;
mod error;
pub mod rules;
mod service;

pub use config::{DEFAULT_MAX_DESCRIPTION_CHARS, DEFAULT_MAX_TITLE_CHARS, TaskValidationConfig};
pub use error::{PlanningDateError, TaskValidationError, TaskViolation};
pub use rules::validate_date;
pub use service::TaskValidator;
