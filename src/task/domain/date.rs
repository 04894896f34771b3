//! Calendar date on which a task is planned.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date (year, month, day) a task is scheduled for.
///
/// The value is unchecked: any combination of numbers can be held, and
/// calendar validity is decided by
/// [`validate_date`](crate::task::validation::rules::validate_date).
/// Ordering is chronological for valid dates because fields compare in
/// year, month, day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanningDate {
    year: i32,
    month: u32,
    day: u32,
}

impl PlanningDate {
    /// Creates a planning date from its raw parts.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1 = January).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Returns the day of the month.
    #[must_use]
    pub const fn day(self) -> u32 {
        self.day
    }

    /// Converts the date into a `chrono` date.
    ///
    /// Returns `None` when the parts do not form a date `chrono` can
    /// represent.
    #[must_use]
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for PlanningDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for PlanningDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
