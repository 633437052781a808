//! Calendar arithmetic
//!
//! Age is a count of whole calendar years, not of elapsed 365-day blocks,
//! so these helpers work on the date part of an instant.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Instant out of range: {instant} minus {years} years")]
    OutOfRange {
        instant: String,
        years: u32,
    },
}

/// Returns the number of whole calendar years from `start` to `end`.
///
/// A year is only counted once its anniversary (month and day) has been
/// reached. The result is negative when `end` precedes `start`.
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    if end < start {
        return -whole_years_between(end, start);
    }

    let mut years = end.year() - start.year();

    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }

    years
}

/// Returns the whole calendar years between the date parts of two instants.
pub fn whole_years_between_instants(start: DateTime<Utc>, end: DateTime<Utc>) -> i32 {
    whole_years_between(start.date_naive(), end.date_naive())
}

/// Returns the instant `years` calendar years before `instant`.
///
/// February 29th maps to February 28th in non-leap target years.
pub fn years_before(instant: DateTime<Utc>, years: u32) -> Result<DateTime<Utc>, TemporalError> {
    years
        .checked_mul(12)
        .and_then(|months| instant.checked_sub_months(Months::new(months)))
        .ok_or_else(|| TemporalError::OutOfRange {
            instant: instant.to_rfc3339(),
            years,
        })
}
