//! Metric types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cost per sale, or a marker that it cannot be computed.
///
/// `NotComputable` stands for every "undefined" outcome (no sales in the
/// window). It is never represented as zero, NaN, or infinity. Serializes
/// as the decimal amount or `null`; displays as the amount or `N/A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum CostPerSale {
    /// Total cost divided by sale count.
    Amount(Decimal),
    /// No sales, so the ratio is undefined.
    NotComputable,
}

impl CostPerSale {
    /// Divides `total_cost` by `sale_count`, or `NotComputable` for zero sales.
    #[must_use]
    pub fn from_ratio(total_cost: Decimal, sale_count: u64) -> Self {
        if sale_count == 0 {
            Self::NotComputable
        } else {
            Self::Amount(total_cost / Decimal::from(sale_count))
        }
    }

    /// The amount, if computable.
    #[must_use]
    pub const fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Amount(amount) => Some(*amount),
            Self::NotComputable => None,
        }
    }

    /// Applies a fallible conversion to the amount, keeping
    /// `NotComputable` as is.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `f`.
    pub fn try_map<E>(self, f: impl FnOnce(Decimal) -> Result<Decimal, E>) -> Result<Self, E> {
        match self {
            Self::Amount(amount) => f(amount).map(Self::Amount),
            Self::NotComputable => Ok(Self::NotComputable),
        }
    }
}

impl From<Option<Decimal>> for CostPerSale {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Self::NotComputable, Self::Amount)
    }
}

impl From<CostPerSale> for Option<Decimal> {
    fn from(value: CostPerSale) -> Self {
        value.amount()
    }
}

impl std::fmt::Display for CostPerSale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{amount}"),
            Self::NotComputable => f.write_str("N/A"),
        }
    }
}

/// Reporting metrics for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Fixed plus variable allocated cost.
    pub total_cost: Decimal,
    /// Leads in the window.
    pub lead_count: u64,
    /// Sales in the window.
    pub sale_count: u64,
    /// Total cost per lead; zero when there are no leads.
    pub cost_per_lead: Decimal,
    /// Total cost per sale; `NotComputable` when there are no sales.
    pub cost_per_sale: CostPerSale,
    /// Sales as a percentage of leads; zero when there are no leads.
    pub conversion_rate_percent: Decimal,
}
