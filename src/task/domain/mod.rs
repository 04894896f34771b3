//! Domain model for task planning.
//!
//! Tasks are plain to-do items with a title, a description, a planning
//! date and a completion status. The domain keeps these values free of any
//! validation policy or infrastructure concern; rules live in
//! [`validation`](crate::task::validation).

mod date;
mod error;
mod ids;
mod task;

pub use date::PlanningDate;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{Task, TaskDraft, TaskStatus};
