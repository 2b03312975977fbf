//! Property-based tests for expense allocation.
//!
//! - Fixed shares are additive over adjacent sub-windows
//! - Full-month windows return the whole amount under both rules
//! - Disjoint windows allocate exactly zero
//! - Months without leads allocate zero variable cost

use chrono::Days;
use leadcost_shared::types::YearMonth;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocator::ExpenseAllocator;
use crate::period::{DateRange, MonthSpan};

/// Strategy to generate expense amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a month between 2000-01 and 2099-12.
fn any_month() -> impl Strategy<Value = YearMonth> {
    (2000i32..2100, 1u32..=12).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

/// Tolerance for comparing sums of independently divided decimals.
fn tolerance() -> Decimal {
    Decimal::new(1, 18)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Allocating two adjacent sub-windows sums to allocating their union.
    #[test]
    fn prop_fixed_additive_over_split(
        amount in positive_amount(),
        month in any_month(),
        lead_in in 0u64..40,
        first_len in 0u64..40,
        second_len in 1u64..40,
    ) {
        let span = MonthSpan::of(month);
        let start = span.month_start - Days::new(lead_in);
        let mid = start + Days::new(first_len);
        let end = mid + Days::new(second_len);

        let whole = ExpenseAllocator::allocate_fixed(amount, &span, &DateRange::new(start, end));
        let left = ExpenseAllocator::allocate_fixed(amount, &span, &DateRange::new(start, mid));
        let right = ExpenseAllocator::allocate_fixed(
            amount,
            &span,
            &DateRange::new(mid + Days::new(1), end),
        );

        prop_assert!((whole - (left + right)).abs() <= tolerance());
    }

    /// The fixed share never exceeds the monthly amount.
    #[test]
    fn prop_fixed_bounded_by_amount(
        amount in positive_amount(),
        month in any_month(),
        start_offset in 0u64..60,
        len in 0u64..60,
    ) {
        let span = MonthSpan::of(month);
        let start = span.month_start - Days::new(30) + Days::new(start_offset);
        let end = start + Days::new(len);
        let share = ExpenseAllocator::allocate_fixed(amount, &span, &DateRange::new(start, end));
        prop_assert!(share >= Decimal::ZERO);
        prop_assert!(share <= amount);
    }

    /// A window equal to the month yields the whole amount under both rules.
    #[test]
    fn prop_full_month_identity(
        amount in positive_amount(),
        month in any_month(),
        leads in 1u64..10_000,
    ) {
        let span = MonthSpan::of(month);
        prop_assert_eq!(ExpenseAllocator::allocate_fixed(amount, &span, &span.range()), amount);
        prop_assert_eq!(ExpenseAllocator::allocate_variable(amount, leads, leads), amount);
    }

    /// A window in the following month allocates nothing.
    #[test]
    fn prop_no_overlap_zero(
        amount in positive_amount(),
        month in any_month(),
        gap in 1u64..400,
        len in 0u64..400,
        leads in 0u64..10_000,
    ) {
        let span = MonthSpan::of(month);
        let start = span.month_end + Days::new(gap);
        let end = start + Days::new(len);
        prop_assert_eq!(
            ExpenseAllocator::allocate_fixed(amount, &span, &DateRange::new(start, end)),
            Decimal::ZERO
        );
        // No month leads fall inside a disjoint window.
        prop_assert_eq!(ExpenseAllocator::allocate_variable(amount, leads, 0), Decimal::ZERO);
    }

    /// A month without leads allocates zero, whatever the amount.
    #[test]
    fn prop_variable_zero_leads_safe(amount in positive_amount(), window_leads in 0u64..100) {
        prop_assert_eq!(
            ExpenseAllocator::allocate_variable(amount, 0, window_leads),
            Decimal::ZERO
        );
    }

    /// Splitting a month's leads between two windows splits the cost.
    #[test]
    fn prop_variable_additive_over_lead_split(
        amount in positive_amount(),
        first in 0u64..5_000,
        second in 0u64..5_000,
    ) {
        let total = first + second;
        prop_assume!(total > 0);
        let left = ExpenseAllocator::allocate_variable(amount, total, first);
        let right = ExpenseAllocator::allocate_variable(amount, total, second);
        prop_assert!((amount - (left + right)).abs() <= tolerance());
    }
}
