//! Aggregation result types.

use leadcost_shared::types::YearMonth;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Allocated cost split by allocation rule.
///
/// Amounts are in the same unit as the input records (minor units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Sum of fixed-expense shares.
    pub fixed_total: Decimal,
    /// Sum of variable-expense shares.
    pub variable_total: Decimal,
}

impl CostBreakdown {
    /// A breakdown with nothing allocated.
    pub const ZERO: Self = Self {
        fixed_total: Decimal::ZERO,
        variable_total: Decimal::ZERO,
    };

    /// Creates a breakdown.
    #[must_use]
    pub const fn new(fixed_total: Decimal, variable_total: Decimal) -> Self {
        Self {
            fixed_total,
            variable_total,
        }
    }

    /// Total allocated cost. Always derived, never stored.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.fixed_total + self.variable_total
    }

    /// Returns true if nothing was allocated.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.fixed_total.is_zero() && self.variable_total.is_zero()
    }
}

impl std::ops::Add for CostBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            fixed_total: self.fixed_total + rhs.fixed_total,
            variable_total: self.variable_total + rhs.variable_total,
        }
    }
}

/// How one project's expenses for one month were attributed to the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAllocation {
    /// Project the expenses and leads belong to.
    pub project: String,
    /// The expense month.
    pub month: YearMonth,
    /// Days of the month inside the window.
    pub overlap_days: u32,
    /// Days in the month.
    pub days_in_month: u32,
    /// Sum of the month's fixed expenses.
    pub fixed_amount: Decimal,
    /// Fixed share attributed to the window.
    pub fixed_share: Decimal,
    /// Sum of the month's variable expenses.
    pub variable_amount: Decimal,
    /// The project's leads generated in the whole month.
    pub month_lead_count: u64,
    /// The project's leads generated in the part of the month inside the window.
    pub window_lead_count: u64,
    /// Variable share attributed to the window.
    pub variable_share: Decimal,
}

/// A cost breakdown together with the per-month rows that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationDetail {
    /// Summed shares.
    pub breakdown: CostBreakdown,
    /// One row per project and expense month overlapping the window,
    /// oldest month first, then by project name.
    pub months: Vec<MonthAllocation>,
}
