//! Application services for task planning.

mod error;
mod planner;

pub use error::{InvalidInputError, TaskServiceError, TaskServiceResult};
pub use planner::TaskPlannerService;
