//! # Checked Arithmetic
//!
//! Overflow-safe decimal operations used by the pricing code.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`round_cents`] - Round-half-up to two fractional digits
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::value_objects::arithmetic::{CheckedArithmetic, round_cents};
//! use rust_decimal::Decimal;
//!
//! let weight = Decimal::new(125, 1); // 12.5
//! let rate = Decimal::new(12, 1); // 1.2
//! let price = round_cents(weight.safe_mul(rate).unwrap());
//! assert_eq!(price.to_string(), "15.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fractional digits carried by monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounds a decimal to cents, half away from zero.
///
/// For the non-negative amounts the calculator produces this is the usual
/// round-half-up. The result always carries exactly two fractional digits,
/// so `34` becomes `34.00`.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::arithmetic::round_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_cents(Decimal::new(10005, 3)).to_string(), "10.01");
/// assert_eq!(round_cents(Decimal::new(10004, 3)).to_string(), "10.00");
/// assert_eq!(round_cents(Decimal::new(34, 0)).to_string(), "34.00");
/// ```
#[inline]
#[must_use]
pub fn round_cents(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod arithmetic_error {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
            assert_eq!(
                ArithmeticError::Underflow.to_string(),
                "arithmetic underflow"
            );
            assert_eq!(
                ArithmeticError::DivisionByZero.to_string(),
                "division by zero"
            );
        }
    }

    mod round_cents_tests {
        use super::*;

        #[test]
        fn midpoint_rounds_up() {
            assert_eq!(round_cents(Decimal::new(1125, 3)), Decimal::new(113, 2));
            assert_eq!(round_cents(Decimal::new(2675, 3)), Decimal::new(268, 2));
        }

        #[test]
        fn below_midpoint_rounds_down() {
            assert_eq!(round_cents(Decimal::new(11249, 4)), Decimal::new(112, 2));
        }

        #[test]
        fn integers_gain_two_digits() {
            let rounded = round_cents(Decimal::new(17, 0));
            assert_eq!(rounded.scale(), 2);
            assert_eq!(rounded.to_string(), "17.00");
        }

        #[test]
        fn single_digit_fraction_is_padded() {
            assert_eq!(round_cents(Decimal::new(155, 1)).to_string(), "15.50");
        }
    }

    mod checked_arithmetic_decimal {
        use super::*;

        #[test]
        fn safe_add_works() {
            let a = Decimal::new(100, 0);
            let b = Decimal::new(50, 0);
            assert_eq!(a.safe_add(b).unwrap(), Decimal::new(150, 0));
        }

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_add(Decimal::ONE),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn safe_sub_works() {
            let a = Decimal::new(100, 0);
            let b = Decimal::new(50, 0);
            assert_eq!(a.safe_sub(b).unwrap(), Decimal::new(50, 0));
        }

        #[test]
        fn safe_mul_works() {
            let a = Decimal::new(12, 0);
            let b = Decimal::new(15, 1);
            assert_eq!(a.safe_mul(b).unwrap(), Decimal::new(18, 0));
        }

        #[test]
        fn safe_mul_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_mul(Decimal::TWO),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn safe_div_works() {
            let a = Decimal::new(100, 0);
            let b = Decimal::new(5, 0);
            assert_eq!(a.safe_div(b).unwrap(), Decimal::new(20, 0));
        }

        #[test]
        fn safe_div_by_zero_fails() {
            let a = Decimal::new(100, 0);
            assert_eq!(a.safe_div(Decimal::ZERO), Err(ArithmeticError::DivisionByZero));
        }
    }
}
