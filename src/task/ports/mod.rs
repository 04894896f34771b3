//! Port contracts for task planning.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

#[cfg(test)]
pub use repository::MockTaskRepository;
pub use repository::{
    Pagination, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TextMatch,
};
