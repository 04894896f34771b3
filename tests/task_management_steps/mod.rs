//! Step definitions for task management BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
