//! Cost-per-lead, cost-per-sale, and conversion rate.

pub mod calculator;
pub mod types;


pub use calculator::MetricsCalculator;
pub use types::{CostPerSale, Metrics};
