//! # Money
//!
//! Non-negative monetary amount with exactly two fractional digits.
//!
//! The currency is implicit (BRL for the current deployment); amounts are
//! rendered as `R$12.34` by [`Money::display_brl`].

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{CheckedArithmetic, round_cents};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount rounded to cents.
///
/// # Invariants
///
/// - Never negative
/// - Always scaled to two fractional digits
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::Money;
/// use rust_decimal::Decimal;
///
/// let price = Money::from_decimal(Decimal::new(340, 1)).unwrap();
/// assert_eq!(price.to_string(), "34.00");
/// assert_eq!(price.display_brl(), "R$34.00");
///
/// assert!(Money::from_decimal(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, 2));

    /// Creates an amount from a decimal, rounding half-up to cents.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeAmount` if the rounded value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        let rounded = round_cents(value);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            return Err(DomainError::NegativeAmount(rounded));
        }
        Ok(Self(rounded.abs()))
    }

    /// Creates an amount, flooring negative values at zero.
    ///
    /// Used by the calculator, where a negative base fee may push a light
    /// shipment below zero.
    #[must_use]
    pub fn clamped(value: Decimal) -> Self {
        let rounded = round_cents(value);
        if rounded.is_sign_negative() || rounded.is_zero() {
            Self::ZERO
        } else {
            Self(rounded)
        }
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true for a zero amount.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Difference `self - rhs`, floored at zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on decimal underflow.
    pub fn saturating_difference(self, rhs: Self) -> DomainResult<Self> {
        let diff = self.0.safe_sub(rhs.0)?;
        Ok(Self::clamped(diff))
    }

    /// Formats the amount as Brazilian reais, e.g. `R$34.00`.
    #[must_use]
    pub fn display_brl(&self) -> String {
        format!("R${}", self.0)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
