//! Expense reports.
//!
//! This module combines aggregation and metrics into the reports handed to
//! the presentation layer:
//! - Single-project (or all-project) expense report
//! - Per-project report table with an all-project total row

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{ExpenseReport, ProjectReportTable};
