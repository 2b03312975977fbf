//! Allocation aggregator.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use leadcost_shared::types::{ProjectFilter, YearMonth};
use rust_decimal::Decimal;

use super::types::{AllocationDetail, CostBreakdown, MonthAllocation};
use crate::allocation::ExpenseAllocator;
use crate::period::{DateRange, MonthSpan, QueryWindow, overlap_days};
use crate::records::{ExpenseKind, ExpenseRecord, LeadRecord};

/// Fixed and variable expense sums for one month.
#[derive(Debug, Default)]
struct MonthTotals {
    fixed: Decimal,
    variable: Decimal,
}

/// Attributes a project's monthly expenses to a query window.
pub struct Aggregator;

impl Aggregator {
    /// Allocates every matching expense month into `window`.
    ///
    /// Months that share no days with the window contribute nothing. A
    /// window that resolves to an empty range yields a zero breakdown.
    #[must_use]
    pub fn aggregate(
        expenses: &[ExpenseRecord],
        leads: &[LeadRecord],
        project: &ProjectFilter,
        window: &QueryWindow,
    ) -> CostBreakdown {
        Self::aggregate_detailed(expenses, leads, project, window).breakdown
    }

    /// Like [`Aggregator::aggregate`], also returning one row per month.
    #[must_use]
    pub fn aggregate_detailed(
        expenses: &[ExpenseRecord],
        leads: &[LeadRecord],
        project: &ProjectFilter,
        window: &QueryWindow,
    ) -> AllocationDetail {
        Self::aggregate_range(expenses, leads, project, &window.resolve())
    }

    /// Allocates into an already resolved date range.
    ///
    /// Expenses are grouped per project and month. Fixed expenses are
    /// prorated by day overlap. Variable expenses are prorated by the share
    /// of the same project's leads for that month requested inside the
    /// range, so lead attribution never crosses a month or project boundary.
    /// Under `ProjectFilter::All` the result is the sum over every project.
    #[must_use]
    pub fn aggregate_range(
        expenses: &[ExpenseRecord],
        leads: &[LeadRecord],
        project: &ProjectFilter,
        range: &DateRange,
    ) -> AllocationDetail {
        if range.is_empty() {
            return AllocationDetail::default();
        }

        let totals = Self::totals_by_month(expenses, project);
        if totals.is_empty() {
            return AllocationDetail::default();
        }
        let lead_dates = Self::lead_dates_by_month(leads, project);

        let mut detail = AllocationDetail::default();
        for ((month, name), month_totals) in totals {
            let span = MonthSpan::of(month);
            let overlap = span.range().intersect(range);
            if overlap.is_empty() {
                continue;
            }

            let fixed_share = ExpenseAllocator::allocate_fixed(month_totals.fixed, &span, range);

            let dates = lead_dates
                .get(&(month, name))
                .map(Vec::as_slice)
                .unwrap_or_default();
            let month_lead_count = dates.len() as u64;
            let window_lead_count = dates.iter().filter(|d| overlap.contains(**d)).count() as u64;
            let variable_share = ExpenseAllocator::allocate_variable(
                month_totals.variable,
                month_lead_count,
                window_lead_count,
            );

            detail.breakdown.fixed_total += fixed_share;
            detail.breakdown.variable_total += variable_share;
            detail.months.push(MonthAllocation {
                project: name.to_string(),
                month,
                overlap_days: overlap_days(&span, range),
                days_in_month: span.days_in_month,
                fixed_amount: month_totals.fixed,
                fixed_share,
                variable_amount: month_totals.variable,
                month_lead_count,
                window_lead_count,
                variable_share,
            });
        }

        detail
    }

    /// Sums matching expenses per month, project, and kind, oldest month first.
    fn totals_by_month<'a>(
        expenses: &'a [ExpenseRecord],
        project: &ProjectFilter,
    ) -> BTreeMap<(YearMonth, &'a str), MonthTotals> {
        let mut totals: BTreeMap<(YearMonth, &str), MonthTotals> = BTreeMap::new();
        for expense in expenses.iter().filter(|e| project.matches(&e.project)) {
            let entry = totals
                .entry((expense.month, expense.project.as_str()))
                .or_default();
            match expense.kind {
                ExpenseKind::Fixed => entry.fixed += expense.amount(),
                ExpenseKind::Variable => entry.variable += expense.amount(),
            }
        }
        totals
    }

    /// Buckets matching lead request dates by calendar month and project.
    fn lead_dates_by_month<'a>(
        leads: &'a [LeadRecord],
        project: &ProjectFilter,
    ) -> BTreeMap<(YearMonth, &'a str), Vec<NaiveDate>> {
        let mut buckets: BTreeMap<(YearMonth, &str), Vec<NaiveDate>> = BTreeMap::new();
        for lead in leads.iter().filter(|l| project.matches(&l.project)) {
            buckets
                .entry((YearMonth::containing(lead.request_date), lead.project.as_str()))
                .or_default()
                .push(lead.request_date);
        }
        buckets
    }
}
