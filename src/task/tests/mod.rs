//! Unit tests for the task module.
//!
//! Tests are organised by layer, covering happy paths, error mapping and
//! edge cases for the public API.
