//! Property-based tests for overlap arithmetic.
//!
//! - Overlap is bounded by the month length
//! - Overlap is additive over a window split into two adjacent parts
//! - Disjoint windows overlap nothing

use chrono::{Days, NaiveDate};
use leadcost_shared::types::YearMonth;
use proptest::prelude::*;

use super::span::{DateRange, MonthSpan, overlap_days};

/// Strategy to generate a month between 2000-01 and 2099-12.
fn any_month() -> impl Strategy<Value = YearMonth> {
    (2000i32..2100, 1u32..=12).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

/// Strategy to generate a date between 1999-01-01 and roughly 2101.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..(365 * 103)).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1999, 1, 1).unwrap() + Days::new(offset)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Overlap never exceeds the month and never goes negative.
    #[test]
    fn prop_overlap_bounded(
        month in any_month(),
        start in any_date(),
        end in any_date(),
    ) {
        let span = MonthSpan::of(month);
        let days = overlap_days(&span, &DateRange::new(start, end));
        prop_assert!(days <= span.days_in_month);
        if start > end {
            prop_assert_eq!(days, 0);
        }
    }

    /// Splitting a window at any day splits the overlap exactly.
    #[test]
    fn prop_overlap_additive(
        month in any_month(),
        start in any_date(),
        first_len in 0u64..120,
        second_len in 1u64..120,
    ) {
        let span = MonthSpan::of(month);
        let mid = start + Days::new(first_len);
        let end = mid + Days::new(second_len);

        let whole = overlap_days(&span, &DateRange::new(start, end));
        let left = overlap_days(&span, &DateRange::new(start, mid));
        let right = overlap_days(&span, &DateRange::new(mid + Days::new(1), end));

        prop_assert_eq!(whole, left + right);
    }

    /// A window ending before the month starts overlaps nothing.
    #[test]
    fn prop_window_before_month_is_zero(
        month in any_month(),
        gap in 1u64..400,
        len in 0u64..400,
    ) {
        let span = MonthSpan::of(month);
        let end = span.month_start - Days::new(gap);
        let start = end - Days::new(len);
        prop_assert_eq!(overlap_days(&span, &DateRange::new(start, end)), 0);
    }

    /// The month's own span overlaps every one of its days.
    #[test]
    fn prop_month_overlaps_itself(month in any_month()) {
        let span = MonthSpan::of(month);
        prop_assert_eq!(overlap_days(&span, &span.range()), span.days_in_month);
    }
}
