//! HTTP transport for the task planner.
//!
//! Owns route paths, JSON field naming, and the choice of status code per
//! service error kind. Every response body uses the
//! `{"data": ..., "error": ...}` envelope.

pub mod dto;
mod error;
mod handlers;
mod routes;

pub use error::ApiError;
pub use handlers::SharedPlanner;
pub use routes::{API_PREFIX, task_router};
