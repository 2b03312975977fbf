//! Expense and lead input records.
//!
//! Records are read-only to the engine. They are fetched and validated by
//! the caller and discarded once a report has been computed.

use chrono::NaiveDate;
use leadcost_shared::types::YearMonth;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an expense accrues within its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseKind {
    /// Accrues uniformly per calendar day (e.g., agency retainer).
    #[serde(alias = "fixed_cost")]
    Fixed,
    /// Accrues per generated lead (e.g., ad spend).
    #[serde(alias = "variable_cost")]
    Variable,
}

/// A monthly expense recorded against a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Project the expense belongs to.
    pub project: String,
    /// Month the expense was incurred in.
    pub month: YearMonth,
    /// Allocation rule for the expense.
    pub kind: ExpenseKind,
    /// Amount in minor currency units (e.g., cents).
    pub amount_minor_units: i64,
}

impl ExpenseRecord {
    /// Creates an expense record.
    #[must_use]
    pub fn new(
        project: impl Into<String>,
        month: YearMonth,
        kind: ExpenseKind,
        amount_minor_units: i64,
    ) -> Self {
        Self {
            project: project.into(),
            month,
            kind,
            amount_minor_units,
        }
    }

    /// Amount as a decimal, still in minor units.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.amount_minor_units)
    }
}

/// A lead generated for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    /// Project the lead was generated for.
    pub project: String,
    /// Date the lead requested contact.
    pub request_date: NaiveDate,
    /// Whether the lead converted into a sale.
    #[serde(default)]
    pub is_sale: bool,
}

impl LeadRecord {
    /// Creates a lead record.
    #[must_use]
    pub fn new(project: impl Into<String>, request_date: NaiveDate, is_sale: bool) -> Self {
        Self {
            project: project.into(),
            request_date,
            is_sale,
        }
    }
}
