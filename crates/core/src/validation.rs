//! Input validation for expense and lead records.
//!
//! The engine assumes well-formed records. Callers run these checks before
//! invoking it and surface failures as validation rejections.

use std::collections::HashSet;

use chrono::NaiveDate;
use leadcost_shared::AppError;
use leadcost_shared::types::{ProjectFilter, YearMonth};
use thiserror::Error;

use crate::records::{ExpenseRecord, LeadRecord};

/// Validation errors for caller-supplied records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Expense amount is negative.
    #[error("Expense for project {project:?} in {month} has negative amount {amount}")]
    NegativeAmount {
        /// Project name.
        project: String,
        /// Expense month.
        month: YearMonth,
        /// Offending amount in minor units.
        amount: i64,
    },

    /// Record has an empty or blank project name.
    #[error("Record has an empty project name")]
    EmptyProject,

    /// Project name collides with the all-projects keyword.
    #[error("Project name {0:?} is reserved for the all-projects filter")]
    ReservedProjectName(String),

    /// Lead falls in a month with no expense record for its project.
    #[error("Lead for project {project:?} on {date} falls in a month without expenses")]
    LeadOutsideExpenseMonths {
        /// Project name.
        project: String,
        /// Lead request date.
        date: NaiveDate,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Checks that a record's project name is usable as a filter value.
fn validate_project_name(project: &str) -> Result<(), ValidationError> {
    if project.trim().is_empty() {
        return Err(ValidationError::EmptyProject);
    }
    if ProjectFilter::from(project).is_all() {
        return Err(ValidationError::ReservedProjectName(project.to_string()));
    }
    Ok(())
}

/// Validates expense records.
///
/// # Errors
///
/// Returns the first negative amount, empty project name, or project named
/// like the all-projects keyword.
pub fn validate_expenses(expenses: &[ExpenseRecord]) -> Result<(), ValidationError> {
    for expense in expenses {
        validate_project_name(&expense.project)?;
        if expense.amount_minor_units < 0 {
            return Err(ValidationError::NegativeAmount {
                project: expense.project.clone(),
                month: expense.month,
                amount: expense.amount_minor_units,
            });
        }
    }
    Ok(())
}

/// Validates lead records.
///
/// # Errors
///
/// Returns the first empty project name or project named like the
/// all-projects keyword.
pub fn validate_leads(leads: &[LeadRecord]) -> Result<(), ValidationError> {
    leads
        .iter()
        .try_for_each(|lead| validate_project_name(&lead.project))
}

/// Strict check: every lead must fall in a month that has at least one
/// expense record for the same project.
///
/// # Errors
///
/// Returns the first lead dated outside its project's expense months.
pub fn validate_lead_coverage(
    expenses: &[ExpenseRecord],
    leads: &[LeadRecord],
) -> Result<(), ValidationError> {
    let covered: HashSet<(&str, YearMonth)> = expenses
        .iter()
        .map(|e| (e.project.as_str(), e.month))
        .collect();

    match leads
        .iter()
        .find(|l| !covered.contains(&(l.project.as_str(), YearMonth::containing(l.request_date))))
    {
        Some(lead) => Err(ValidationError::LeadOutsideExpenseMonths {
            project: lead.project.clone(),
            date: lead.request_date,
        }),
        None => Ok(()),
    }
}
