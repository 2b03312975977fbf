//! Report types.

use leadcost_shared::types::{Money, MoneyError, ProjectFilter};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::{CostBreakdown, MonthAllocation};
use crate::metrics::Metrics;
use crate::period::{DateRange, QueryWindow};

/// Allocated cost and metrics for one project filter and window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseReport {
    /// Project the report covers.
    pub project: ProjectFilter,
    /// Window as requested.
    pub window: QueryWindow,
    /// Window resolved to concrete dates.
    pub range: DateRange,
    /// Allocated cost by rule.
    pub breakdown: CostBreakdown,
    /// Derived metrics.
    pub metrics: Metrics,
    /// Per-month allocation rows.
    pub months: Vec<MonthAllocation>,
}

impl ExpenseReport {
    /// Returns a copy with money in major units, rounded for display.
    ///
    /// Money fields are divided by `10^minor_unit_scale`; money and the
    /// conversion rate are then rounded to `decimal_places` with banker's
    /// rounding. Counts are unchanged and `NotComputable` stays as is.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError` if the scale is larger than a decimal can hold.
    pub fn present(&self, minor_unit_scale: u32, decimal_places: u32) -> Result<Self, MoneyError> {
        let money = |amount: Decimal| -> Result<Decimal, MoneyError> {
            Ok(Money::round(
                Money::minor_to_major(amount, minor_unit_scale)?,
                decimal_places,
            ))
        };

        let breakdown = CostBreakdown::new(
            money(self.breakdown.fixed_total)?,
            money(self.breakdown.variable_total)?,
        );

        let metrics = Metrics {
            total_cost: money(self.metrics.total_cost)?,
            cost_per_lead: money(self.metrics.cost_per_lead)?,
            cost_per_sale: self.metrics.cost_per_sale.try_map(&money)?,
            conversion_rate_percent: Money::round(
                self.metrics.conversion_rate_percent,
                decimal_places,
            ),
            ..self.metrics
        };

        let months = self
            .months
            .iter()
            .map(|row| {
                Ok(MonthAllocation {
                    fixed_amount: money(row.fixed_amount)?,
                    fixed_share: money(row.fixed_share)?,
                    variable_amount: money(row.variable_amount)?,
                    variable_share: money(row.variable_share)?,
                    ..row.clone()
                })
            })
            .collect::<Result<Vec<_>, MoneyError>>()?;

        Ok(Self {
            project: self.project.clone(),
            window: self.window,
            range: self.range,
            breakdown,
            metrics,
            months,
        })
    }
}

/// One report per project plus an all-project total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReportTable {
    /// Window every row was computed for.
    pub window: QueryWindow,
    /// One report per project, sorted by project name.
    pub rows: Vec<ExpenseReport>,
    /// Report over every project. Its breakdown is the sum of the rows'.
    pub total: ExpenseReport,
}

impl ProjectReportTable {
    /// Returns a copy with every report passed through [`ExpenseReport::present`].
    ///
    /// # Errors
    ///
    /// Returns `MoneyError` if the scale is larger than a decimal can hold.
    pub fn present(&self, minor_unit_scale: u32, decimal_places: u32) -> Result<Self, MoneyError> {
        Ok(Self {
            window: self.window,
            rows: self
                .rows
                .iter()
                .map(|row| row.present(minor_unit_scale, decimal_places))
                .collect::<Result<Vec<_>, _>>()?,
            total: self.total.present(minor_unit_scale, decimal_places)?,
        })
    }
}
