//! Metrics calculator.

use rust_decimal::Decimal;

use super::types::{CostPerSale, Metrics};
use crate::aggregate::CostBreakdown;

/// Derives per-lead and per-sale metrics from an allocated breakdown.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Computes metrics for a breakdown and the window's lead and sale counts.
    ///
    /// Every zero denominator is an explicit branch:
    /// - no leads: cost per lead and conversion rate are zero
    /// - no sales: cost per sale is `CostPerSale::NotComputable`
    #[must_use]
    pub fn compute(breakdown: &CostBreakdown, lead_count: u64, sale_count: u64) -> Metrics {
        let total_cost = breakdown.total();

        let cost_per_lead = if lead_count == 0 {
            Decimal::ZERO
        } else {
            total_cost / Decimal::from(lead_count)
        };

        let conversion_rate_percent = if lead_count == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(sale_count) * Decimal::ONE_HUNDRED / Decimal::from(lead_count)
        };

        Metrics {
            total_cost,
            lead_count,
            sale_count,
            cost_per_lead,
            cost_per_sale: CostPerSale::from_ratio(total_cost, sale_count),
            conversion_rate_percent,
        }
    }
}
