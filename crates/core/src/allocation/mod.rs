//! Expense proration into a query window.
//!
//! Two rules are applied side by side:
//! - fixed expenses are split by the fraction of the month's days that fall
//!   inside the window
//! - variable expenses are split by the fraction of the month's leads that
//!   fall inside the window

pub mod allocator;

#[cfg(test)]
mod props;

pub use allocator::ExpenseAllocator;
