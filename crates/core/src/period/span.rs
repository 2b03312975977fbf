//! Month spans, inclusive date ranges, and the overlap calculator.

use chrono::NaiveDate;
use leadcost_shared::types::YearMonth;
use serde::{Deserialize, Serialize};

/// An inclusive date range `[start, end]`.
///
/// A range whose start is after its end is empty. Empty ranges are valid
/// values: they overlap nothing and contain no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range. `start > end` yields an empty range.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The whole representable calendar.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    /// Returns true if the range contains no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Returns true if the date falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Days shared by both ranges. May be empty.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    /// Inclusive day count, zero when empty.
    #[must_use]
    pub fn len_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }
}

/// The calendar days of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthSpan {
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Last day of the month.
    pub month_end: NaiveDate,
    /// Number of days in the month.
    pub days_in_month: u32,
}

impl MonthSpan {
    /// Builds the span for a calendar month.
    #[must_use]
    pub fn of(month: YearMonth) -> Self {
        Self {
            month_start: month.first_day(),
            month_end: month.last_day(),
            days_in_month: month.days_in_month(),
        }
    }

    /// The span as a date range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.month_start, self.month_end)
    }
}

/// Number of days a month shares with a window.
///
/// Returns 0 when they do not overlap, including when the window is empty.
/// The result never exceeds `span.days_in_month`.
#[must_use]
pub fn overlap_days(span: &MonthSpan, window: &DateRange) -> u32 {
    let days = span.range().intersect(window).len_days();
    // Bounded by the month length, so the conversion cannot fail.
    u32::try_from(days).unwrap_or(0)
}
