//! Fixed and variable expense allocators.

use rust_decimal::Decimal;

use crate::period::{DateRange, MonthSpan, overlap_days};

/// Allocation rules for a single month's expense.
///
/// Both rules multiply before dividing, so allocating a whole month (all of
/// its days, or all of its leads) returns the amount exactly.
pub struct ExpenseAllocator;

impl ExpenseAllocator {
    /// Share of a fixed monthly expense owed to `window`.
    ///
    /// `amount * overlap_days / days_in_month`; exactly zero when the month
    /// and the window share no days.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use leadcost_core::allocation::ExpenseAllocator;
    /// use leadcost_core::period::{DateRange, MonthSpan};
    /// use leadcost_core::YearMonth;
    /// use rust_decimal_macros::dec;
    ///
    /// let span = MonthSpan::of(YearMonth::new(2024, 1).unwrap());
    /// let window = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    /// );
    /// let share = ExpenseAllocator::allocate_fixed(dec!(1000), &span, &window);
    /// assert_eq!(share.round_dp(2), dec!(483.87));
    /// ```
    #[must_use]
    pub fn allocate_fixed(amount: Decimal, span: &MonthSpan, window: &DateRange) -> Decimal {
        let days = overlap_days(span, window);
        if days == 0 || span.days_in_month == 0 {
            return Decimal::ZERO;
        }
        if days == span.days_in_month {
            return amount;
        }

        amount * Decimal::from(days) / Decimal::from(span.days_in_month)
    }

    /// Share of a variable monthly expense owed to `window`.
    ///
    /// `amount / month_lead_count * window_lead_count`, where
    /// `window_lead_count` counts the month's leads that fall inside the
    /// window. A month without leads attributes nothing to any window.
    ///
    /// # Example
    ///
    /// ```
    /// use leadcost_core::allocation::ExpenseAllocator;
    /// use rust_decimal_macros::dec;
    ///
    /// // 310 of ad spend over 31 leads is 10 per lead.
    /// assert_eq!(ExpenseAllocator::allocate_variable(dec!(310), 31, 10), dec!(100));
    /// assert_eq!(ExpenseAllocator::allocate_variable(dec!(310), 0, 0), dec!(0));
    /// ```
    #[must_use]
    pub fn allocate_variable(
        amount: Decimal,
        month_lead_count: u64,
        window_lead_count: u64,
    ) -> Decimal {
        if month_lead_count == 0 || window_lead_count == 0 {
            return Decimal::ZERO;
        }
        if window_lead_count == month_lead_count {
            return amount;
        }

        amount * Decimal::from(window_lead_count) / Decimal::from(month_lead_count)
    }
}
