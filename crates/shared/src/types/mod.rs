//! Common types used across the application.

pub mod money;
pub mod month;
pub mod project;

pub use money::{Money, MoneyError};
pub use month::{MonthError, YearMonth};
pub use project::ProjectFilter;
