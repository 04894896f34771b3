//! Task planning for Dayplanner.
//!
//! Clients create, read, update, delete and filter to-do items. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
