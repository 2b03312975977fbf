//! Calendar month keys for expense records.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a `YearMonth`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthError {
    /// Month number outside 1..=12.
    #[error("Invalid month number: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year outside the supported calendar range.
    #[error("Month {year}-{month:02} is outside the supported calendar range")]
    OutOfRange {
        /// Year.
        year: i32,
        /// Month number.
        month: u32,
    },

    /// String is not in `YYYY-MM` form.
    #[error("Invalid month format: {0:?} (expected YYYY-MM)")]
    Parse(String),
}

/// A calendar month, e.g. January 2024.
///
/// Always holds a month that exists in the `chrono` calendar, so the first
/// and last day are available without further checks. Ordering is
/// chronological. Serializes as `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl YearMonth {
    /// Creates a month from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns `MonthError::InvalidMonth` for month numbers outside 1..=12 and
    /// `MonthError::OutOfRange` if the year cannot be represented.
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError::InvalidMonth(month));
        }
        let first_day =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(MonthError::OutOfRange { year, month })?;
        Ok(Self::containing(first_day))
    }

    /// Returns the month a date falls in.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let first_day = date - Days::new(u64::from(date.day0()));
        let length = days_in_month(first_day.year(), first_day.month());
        // The last day of an existing month is always representable.
        let last_day = first_day + Days::new(u64::from(length - 1));
        Self {
            first_day,
            last_day,
        }
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Month number, 1-based.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// First calendar day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last calendar day of the month.
    #[must_use]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Number of calendar days in the month (28-31).
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }
}

/// Days in a Gregorian month.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl std::str::FromStr for YearMonth {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year, month) = trimmed
            .rsplit_once('-')
            .ok_or_else(|| MonthError::Parse(s.to_string()))?;
        let year: i32 = year.parse().map_err(|_| MonthError::Parse(s.to_string()))?;
        let month: u32 = month.parse().map_err(|_| MonthError::Parse(s.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = MonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
