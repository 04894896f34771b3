//! Adapter implementations for task planning ports.
//!
//! - [`memory`]: in-process repository for tests and local runs
//! - [`postgres`]: Diesel-backed `PostgreSQL` repository
//! - [`http`]: axum transport exposing the planner service as JSON

pub mod http;
pub mod memory;
pub mod postgres;
