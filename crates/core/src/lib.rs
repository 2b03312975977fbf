//! Expense allocation engine for Leadcost.
//!
//! This crate attributes monthly marketing expenses to an arbitrary
//! reporting window and derives cost-per-lead and cost-per-sale metrics.
//! It holds no state, performs no I/O, and does not log: every operation is
//! a pure function of its arguments and is safe to call concurrently.
//!
//! # Modules
//!
//! - `records` - Expense and lead input records
//! - `period` - Month spans, query windows, and day-overlap arithmetic
//! - `allocation` - Fixed (day-based) and variable (lead-based) proration
//! - `aggregate` - Per-month allocation summed into a cost breakdown
//! - `metrics` - Cost-per-lead, cost-per-sale, and conversion rate
//! - `report` - Single-project reports and per-project report tables
//! - `validation` - Caller-side checks run before the engine

pub mod aggregate;
pub mod allocation;
pub mod metrics;
pub mod period;
pub mod records;
pub mod report;
pub mod validation;

pub use leadcost_shared::types::{ProjectFilter, YearMonth};
