//! Report generation service.

use std::collections::BTreeSet;

use leadcost_shared::types::ProjectFilter;
use rayon::prelude::*;

use super::types::{ExpenseReport, ProjectReportTable};
use crate::aggregate::Aggregator;
use crate::metrics::MetricsCalculator;
use crate::period::{DateRange, QueryWindow};
use crate::records::{ExpenseRecord, LeadRecord};

/// Service for generating expense reports.
pub struct ReportService;

impl ReportService {
    /// Computes the cost breakdown and metrics for a project and window.
    ///
    /// The window is resolved once. Lead count is the number of the
    /// project's leads requested inside the window. When `sale_count` is
    /// `None`, it is the number of those leads flagged as sales.
    #[must_use]
    pub fn compute_expense_report(
        expenses: &[ExpenseRecord],
        leads: &[LeadRecord],
        project: &ProjectFilter,
        window: &QueryWindow,
        sale_count: Option<u64>,
    ) -> ExpenseReport {
        let range = window.resolve();
        let detail = Aggregator::aggregate_range(expenses, leads, project, &range);

        let (lead_count, flagged_sales) = Self::count_leads(leads, project, &range);
        let sale_count = sale_count.unwrap_or(flagged_sales);
        let metrics = MetricsCalculator::compute(&detail.breakdown, lead_count, sale_count);

        ExpenseReport {
            project: project.clone(),
            window: *window,
            range,
            breakdown: detail.breakdown,
            metrics,
            months: detail.months,
        }
    }

    /// Computes one report per project, plus a total over all projects.
    ///
    /// Projects are every distinct name found in `expenses` or `leads`.
    /// Rows are computed in parallel and returned sorted by project name.
    /// Sale counts come from each lead's sale flag. The total row's
    /// breakdown and counts equal the sums over the rows.
    #[must_use]
    pub fn compute_project_reports(
        expenses: &[ExpenseRecord],
        leads: &[LeadRecord],
        window: &QueryWindow,
    ) -> ProjectReportTable {
        let projects: Vec<&str> = expenses
            .iter()
            .map(|e| e.project.as_str())
            .chain(leads.iter().map(|l| l.project.as_str()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let rows = projects
            .par_iter()
            .map(|project| {
                Self::compute_expense_report(
                    expenses,
                    leads,
                    &ProjectFilter::named(*project),
                    window,
                    None,
                )
            })
            .collect();

        ProjectReportTable {
            window: *window,
            rows,
            total: Self::compute_expense_report(expenses, leads, &ProjectFilter::All, window, None),
        }
    }

    /// Counts the project's leads inside `range`, and how many are sales.
    #[must_use]
    pub fn count_leads(
        leads: &[LeadRecord],
        project: &ProjectFilter,
        range: &DateRange,
    ) -> (u64, u64) {
        leads
            .iter()
            .filter(|l| project.matches(&l.project) && range.contains(l.request_date))
            .fold((0, 0), |(total, sales), lead| {
                (total + 1, sales + u64::from(lead.is_sale))
            })
    }
}
