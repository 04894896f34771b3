//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Planning date.
    pub planning_date: NaiveDate,
    /// Completion flag.
    pub status: bool,
}

/// Insert and full-replacement model for task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskContentRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Planning date.
    pub planning_date: NaiveDate,
    /// Completion flag.
    pub status: bool,
}
