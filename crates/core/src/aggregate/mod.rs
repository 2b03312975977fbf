//! Month-by-month allocation summed into a cost breakdown.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::Aggregator;
pub use types::{AllocationDetail, CostBreakdown, MonthAllocation};
