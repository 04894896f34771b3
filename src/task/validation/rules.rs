//! Individual validation rule implementations.
//!
//! Each rule is a pure function checking one aspect of a candidate task and
//! returning `Ok(())` or the specific violation it detected.

use super::{PlanningDateError, TaskValidationConfig, TaskViolation};
use crate::task::domain::PlanningDate;

/// Returns `true` for Gregorian leap years.
///
/// # Examples
///
/// ```
/// use dayplanner::task::validation::rules::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Returns the number of days in `month` of `year`.
///
/// Returns `None` when the month is outside 1 to 12.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Validates that a planning date is a real calendar date.
///
/// # Errors
///
/// Returns [`PlanningDateError`] for a non-positive year, a month outside
/// 1 to 12, a day that does not exist in the month, or a year past the
/// last date `chrono` can represent.
pub fn validate_date(date: PlanningDate) -> Result<(), PlanningDateError> {
    if date.year() <= 0 {
        return Err(PlanningDateError::NonPositiveYear(date.year()));
    }
    let Some(max) = days_in_month(date.year(), date.month()) else {
        return Err(PlanningDateError::MonthOutOfRange(date.month()));
    };
    if date.day() == 0 || date.day() > max {
        return Err(PlanningDateError::DayOutOfRange {
            day: date.day(),
            max,
        });
    }
    if date.to_naive_date().is_none() {
        return Err(PlanningDateError::YearOutOfRange(date.year()));
    }
    Ok(())
}

/// Validates title presence and length.
///
/// # Errors
///
/// Returns [`TaskViolation::NoTitle`] for an empty title or
/// [`TaskViolation::TitleTooLong`] when it exceeds the configured limit.
pub fn validate_title(title: &str, config: &TaskValidationConfig) -> Result<(), TaskViolation> {
    if title.is_empty() {
        return Err(TaskViolation::NoTitle);
    }
    let actual = title.chars().count();
    if actual > config.max_title_chars {
        return Err(TaskViolation::TitleTooLong {
            max: config.max_title_chars,
            actual,
        });
    }
    Ok(())
}

/// Validates description length.
///
/// # Errors
///
/// Returns [`TaskViolation::DescriptionTooLong`] when the description
/// exceeds the configured limit.
pub fn validate_description(
    description: &str,
    config: &TaskValidationConfig,
) -> Result<(), TaskViolation> {
    let actual = description.chars().count();
    if actual > config.max_description_chars {
        return Err(TaskViolation::DescriptionTooLong {
            max: config.max_description_chars,
            actual,
        });
    }
    Ok(())
}

/// Validates that a planning date is a calendar date on or after `today`.
///
/// The expiry comparison only runs for calendar-valid dates.
///
/// # Errors
///
/// Returns [`TaskViolation::DateInvalid`] or [`TaskViolation::DateExpired`].
pub fn validate_schedule(date: PlanningDate, today: PlanningDate) -> Result<(), TaskViolation> {
    validate_date(date).map_err(TaskViolation::DateInvalid)?;
    if date < today {
        return Err(TaskViolation::DateExpired { date, today });
    }
    Ok(())
}
