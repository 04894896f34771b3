//! Dayplanner: a task-planning backend.
//!
//! This crate validates and stores to-do items, each with a title, a
//! description, a planning date and a completion status, and exposes them
//! over an HTTP/JSON API.
//!
//! # Architecture
//!
//! Dayplanner follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task validation, orchestration, storage and transport

pub mod task;
