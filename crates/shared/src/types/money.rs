//! Minor-unit money conversion with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Expense records carry integer minor units (e.g., cents); everything
//! derived from them is a `rust_decimal::Decimal`.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors raised when scaling money amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Scale exceeds what a `Decimal` can hold.
    #[error("Scale {0} exceeds the maximum decimal scale of 28")]
    ScaleTooLarge(u32),

    /// Result does not fit in a `Decimal`.
    #[error("Amount overflow while scaling")]
    Overflow,
}

/// Money helpers for minor/major unit conversion and presentation rounding.
pub struct Money;

impl Money {
    /// Converts an amount in minor units to major units.
    ///
    /// `scale` is the number of decimal digits in a major unit: 2 for cents.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use leadcost_shared::types::Money;
    ///
    /// assert_eq!(Money::minor_to_major(dec!(12345), 2).unwrap(), dec!(123.45));
    /// ```
    pub fn minor_to_major(amount: Decimal, scale: u32) -> Result<Decimal, MoneyError> {
        let factor = Decimal::try_new(1, scale).map_err(|_| MoneyError::ScaleTooLarge(scale))?;
        amount.checked_mul(factor).ok_or(MoneyError::Overflow)
    }

    /// Rounds for display using banker's rounding.
    #[must_use]
    pub fn round(amount: Decimal, decimal_places: u32) -> Decimal {
        amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minor_to_major_cents() {
        assert_eq!(Money::minor_to_major(dec!(100000), 2).unwrap(), dec!(1000));
        assert_eq!(Money::minor_to_major(dec!(1), 2).unwrap(), dec!(0.01));
    }

    #[test]
    fn test_minor_to_major_zero_scale_is_identity() {
        assert_eq!(Money::minor_to_major(dec!(483.87), 0).unwrap(), dec!(483.87));
    }

    #[test]
    fn test_minor_to_major_fractional_minor_units() {
        // Prorated shares are fractional even in minor units.
        assert_eq!(Money::minor_to_major(dec!(48387.5), 2).unwrap(), dec!(483.875));
    }

    #[test]
    fn test_minor_to_major_rejects_large_scale() {
        assert_eq!(
            Money::minor_to_major(dec!(1), 29),
            Err(MoneyError::ScaleTooLarge(29))
        );
    }

    #[test]
    fn test_round_bankers() {
        assert_eq!(Money::round(dec!(0.125), 2), dec!(0.12));
        assert_eq!(Money::round(dec!(0.135), 2), dec!(0.14));
        assert_eq!(Money::round(dec!(483.870967), 2), dec!(483.87));
    }
}
