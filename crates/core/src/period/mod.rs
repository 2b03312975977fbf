//! Month spans, query windows, and day-overlap arithmetic.

pub mod error;
pub mod span;
pub mod window;

#[cfg(test)]
mod props;

pub use error::PeriodError;
pub use span::{DateRange, MonthSpan, overlap_days};
pub use window::{CalendarYear, QueryWindow};
