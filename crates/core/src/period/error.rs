//! Period error types.

use leadcost_shared::AppError;
use leadcost_shared::types::MonthError;
use thiserror::Error;

/// Errors raised while building query windows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Month could not be built.
    #[error(transparent)]
    Month(#[from] MonthError),

    /// Year outside the supported calendar range.
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}

impl From<PeriodError> for AppError {
    fn from(err: PeriodError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
