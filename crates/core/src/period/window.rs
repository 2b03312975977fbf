//! Query windows chosen by the caller.

use chrono::NaiveDate;
use leadcost_shared::types::YearMonth;
use serde::{Deserialize, Serialize};

use super::error::PeriodError;
use super::span::DateRange;

/// A calendar year whose first and last days are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct CalendarYear {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl CalendarYear {
    /// Creates a calendar year.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::YearOutOfRange` if January 1st or December 31st
    /// of the year cannot be represented.
    pub fn new(year: i32) -> Result<Self, PeriodError> {
        let first_day =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(PeriodError::YearOutOfRange(year))?;
        let last_day =
            NaiveDate::from_ymd_opt(year, 12, 31).ok_or(PeriodError::YearOutOfRange(year))?;
        Ok(Self {
            first_day,
            last_day,
        })
    }

    /// The year number.
    #[must_use]
    pub fn year(&self) -> i32 {
        chrono::Datelike::year(&self.first_day)
    }

    /// January 1st through December 31st.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.first_day, self.last_day)
    }
}

impl TryFrom<i32> for CalendarYear {
    type Error = PeriodError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CalendarYear> for i32 {
    fn from(value: CalendarYear) -> Self {
        value.year()
    }
}

/// The reporting period costs are allocated into.
///
/// Serialized with a `kind` tag, e.g. `{"kind":"month","month":"2024-01"}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryWindow {
    /// An explicit inclusive date range. `start > end` is allowed and
    /// allocates nothing.
    Explicit {
        /// First day.
        start: NaiveDate,
        /// Last day.
        end: NaiveDate,
    },
    /// A single calendar month.
    Month {
        /// The month.
        month: YearMonth,
    },
    /// A whole calendar year.
    Year {
        /// The year.
        year: CalendarYear,
    },
    /// Every date.
    #[default]
    AllTime,
}

impl QueryWindow {
    /// An explicit inclusive date range.
    #[must_use]
    pub const fn explicit(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Explicit { start, end }
    }

    /// A single calendar month.
    ///
    /// # Errors
    ///
    /// Returns an error for month numbers outside 1..=12 or unrepresentable years.
    pub fn month(year: i32, month: u32) -> Result<Self, PeriodError> {
        Ok(Self::Month {
            month: YearMonth::new(year, month)?,
        })
    }

    /// A whole calendar year.
    ///
    /// # Errors
    ///
    /// Returns an error for unrepresentable years.
    pub fn year(year: i32) -> Result<Self, PeriodError> {
        Ok(Self::Year {
            year: CalendarYear::new(year)?,
        })
    }

    /// Every date.
    #[must_use]
    pub const fn all_time() -> Self {
        Self::AllTime
    }

    /// Resolves the window to concrete inclusive dates.
    ///
    /// `AllTime` resolves to the whole representable calendar. An explicit
    /// window with `start > end` resolves to an empty range.
    #[must_use]
    pub fn resolve(&self) -> DateRange {
        match self {
            Self::Explicit { start, end } => DateRange::new(*start, *end),
            Self::Month { month } => DateRange::new(month.first_day(), month.last_day()),
            Self::Year { year } => year.range(),
            Self::AllTime => DateRange::unbounded(),
        }
    }
}

impl std::fmt::Display for QueryWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit { start, end } => write!(f, "{start}..={end}"),
            Self::Month { month } => write!(f, "{month}"),
            Self::Year { year } => write!(f, "{}", year.year()),
            Self::AllTime => f.write_str("all time"),
        }
    }
}
