//! Property-based tests for aggregation.
//!
//! - Conservation: an all-time window attributes every expense exactly
//! - Additivity: adjacent sub-windows sum to their union
//! - Months outside the window contribute nothing
//! - The all-project filter sums the per-project results

use chrono::{Days, NaiveDate};
use leadcost_shared::types::{ProjectFilter, YearMonth};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::Aggregator;
use crate::period::QueryWindow;
use crate::records::{ExpenseKind, ExpenseRecord, LeadRecord};

const PROJECT: &str = "acme";
const OTHER_PROJECT: &str = "globex";

/// Strategy to generate a month in 2023-2024.
fn any_month() -> impl Strategy<Value = YearMonth> {
    (2023i32..=2024, 1u32..=12).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

fn any_kind() -> impl Strategy<Value = ExpenseKind> {
    prop_oneof![Just(ExpenseKind::Fixed), Just(ExpenseKind::Variable)]
}

/// Strategy to generate 1-20 expense records for one project.
fn expenses() -> impl Strategy<Value = Vec<ExpenseRecord>> {
    prop::collection::vec(
        (any_month(), any_kind(), 0i64..10_000_000),
        1..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(month, kind, amount)| ExpenseRecord::new(PROJECT, month, kind, amount))
            .collect()
    })
}

/// Leads on random days of 2023-2024, plus one lead in every expense month
/// so that no variable expense falls into the zero-lead rule.
fn leads_covering(expenses: &[ExpenseRecord], extra_offsets: &[u64]) -> Vec<LeadRecord> {
    let origin = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let mut leads: Vec<LeadRecord> = expenses
        .iter()
        .map(|e| LeadRecord::new(PROJECT, e.month.first_day(), false))
        .collect();
    leads.extend(
        extra_offsets
            .iter()
            .map(|offset| LeadRecord::new(PROJECT, origin + Days::new(*offset), false)),
    );
    leads
}

/// Expenses and leads spread over two projects.
fn two_project_records() -> impl Strategy<Value = (Vec<ExpenseRecord>, Vec<LeadRecord>)> {
    let expenses = prop::collection::vec(
        (any::<bool>(), any_month(), any_kind(), 0i64..10_000_000),
        1..20,
    );
    let leads = prop::collection::vec((any::<bool>(), 0u64..730), 0..60);
    (expenses, leads).prop_map(|(expenses, leads)| {
        let origin = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let name = |first: bool| if first { PROJECT } else { OTHER_PROJECT };
        (
            expenses
                .into_iter()
                .map(|(first, month, kind, amount)| {
                    ExpenseRecord::new(name(first), month, kind, amount)
                })
                .collect(),
            leads
                .into_iter()
                .map(|(first, offset)| {
                    LeadRecord::new(name(first), origin + Days::new(offset), false)
                })
                .collect(),
        )
    })
}

fn tolerance() -> Decimal {
    Decimal::new(1, 15)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// An all-time window attributes exactly the sum of every expense.
    #[test]
    fn prop_all_time_conserves_expenses(
        expenses in expenses(),
        offsets in prop::collection::vec(0u64..730, 0..50),
    ) {
        let leads = leads_covering(&expenses, &offsets);
        let result = Aggregator::aggregate(
            &expenses,
            &leads,
            &ProjectFilter::named(PROJECT),
            &QueryWindow::AllTime,
        );

        let fixed: Decimal = expenses
            .iter()
            .filter(|e| e.kind == ExpenseKind::Fixed)
            .map(ExpenseRecord::amount)
            .sum();
        let variable: Decimal = expenses
            .iter()
            .filter(|e| e.kind == ExpenseKind::Variable)
            .map(ExpenseRecord::amount)
            .sum();

        prop_assert_eq!(result.fixed_total, fixed);
        prop_assert_eq!(result.variable_total, variable);
        prop_assert_eq!(result.total(), fixed + variable);
    }

    /// Two adjacent windows allocate the same total as their union.
    #[test]
    fn prop_split_window_additive(
        expenses in expenses(),
        offsets in prop::collection::vec(0u64..730, 0..50),
        start in 0u64..700,
        first_len in 0u64..200,
        second_len in 1u64..200,
    ) {
        let leads = leads_covering(&expenses, &offsets);
        let origin = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let start = origin + Days::new(start);
        let mid = start + Days::new(first_len);
        let end = mid + Days::new(second_len);
        let filter = ProjectFilter::named(PROJECT);

        let whole = Aggregator::aggregate(
            &expenses, &leads, &filter, &QueryWindow::explicit(start, end),
        );
        let left = Aggregator::aggregate(
            &expenses, &leads, &filter, &QueryWindow::explicit(start, mid),
        );
        let right = Aggregator::aggregate(
            &expenses, &leads, &filter, &QueryWindow::explicit(mid + Days::new(1), end),
        );

        let parts = left + right;
        prop_assert!((whole.fixed_total - parts.fixed_total).abs() <= tolerance());
        prop_assert!((whole.variable_total - parts.variable_total).abs() <= tolerance());
    }

    /// A window after every expense month allocates nothing.
    #[test]
    fn prop_window_after_history_is_zero(
        expenses in expenses(),
        offsets in prop::collection::vec(0u64..730, 0..50),
    ) {
        let leads = leads_covering(&expenses, &offsets);
        let window = QueryWindow::year(2025).unwrap();
        let result = Aggregator::aggregate(
            &expenses,
            &leads,
            &ProjectFilter::All,
            &window,
        );
        prop_assert!(result.is_zero());
    }

    /// The all-project filter allocates the sum of the per-project results.
    #[test]
    fn prop_all_projects_is_sum_of_projects(
        (expenses, leads) in two_project_records(),
        start in 0u64..700,
        len in 0u64..400,
    ) {
        let origin = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let start = origin + Days::new(start);
        let window = QueryWindow::explicit(start, start + Days::new(len));

        let all = Aggregator::aggregate(&expenses, &leads, &ProjectFilter::All, &window);
        let first = Aggregator::aggregate(
            &expenses, &leads, &ProjectFilter::named(PROJECT), &window,
        );
        let second = Aggregator::aggregate(
            &expenses, &leads, &ProjectFilter::named(OTHER_PROJECT), &window,
        );
        let sum = first + second;

        prop_assert!((all.fixed_total - sum.fixed_total).abs() <= tolerance());
        prop_assert!((all.variable_total - sum.variable_total).abs() <= tolerance());
    }
}
