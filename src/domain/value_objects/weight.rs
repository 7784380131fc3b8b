//! # Weight
//!
//! Strictly positive parcel weight in kilograms.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Heaviest accepted parcel, in kilograms.
///
/// Keeps `weight * per_kg_rate` within decimal range for every accepted
/// tariff, so pricing a valid shipment cannot overflow.
pub const MAX_WEIGHT_KG: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A parcel weight in kilograms.
///
/// # Invariants
///
/// - Strictly greater than zero
/// - At most [`MAX_WEIGHT_KG`]
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::Weight;
/// use rust_decimal::Decimal;
///
/// let weight = Weight::new(Decimal::new(125, 1)).unwrap();
/// assert_eq!(weight.to_string(), "12.5");
///
/// assert!(Weight::new(Decimal::ZERO).is_err());
/// assert!("abc".parse::<Weight>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Weight(Decimal);

impl Weight {
    /// Creates a weight, rejecting zero and negative values.
    ///
    /// Trailing zeros are normalised away, so `12.0` and `12` compare and
    /// render identically.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeight` if `kg <= 0`, or
    /// `DomainError::WeightAboveLimit` if `kg` exceeds [`MAX_WEIGHT_KG`].
    pub fn new(kg: Decimal) -> DomainResult<Self> {
        if kg <= Decimal::ZERO {
            return Err(DomainError::InvalidWeight(kg.normalize().to_string()));
        }
        if kg > MAX_WEIGHT_KG {
            return Err(DomainError::WeightAboveLimit {
                kg: kg.normalize(),
                max: MAX_WEIGHT_KG,
            });
        }
        Ok(Self(kg.normalize()))
    }

    /// Returns the weight in kilograms.
    #[inline]
    #[must_use]
    pub const fn kg(&self) -> Decimal {
        self.0
    }

    /// Returns a weight lighter by `kg`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeight` if the result would not be
    /// positive, or `DomainError::Arithmetic` on underflow.
    pub fn reduced_by(&self, kg: Decimal) -> DomainResult<Self> {
        Self::new(self.0.safe_sub(kg)?)
    }
}

impl TryFrom<Decimal> for Weight {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for Decimal {
    fn from(value: Weight) -> Self {
        value.0
    }
}

impl FromStr for Weight {
    type Err = DomainError;

    /// Parses plain (`12.5`) and scientific (`1.25e1`) notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let kg = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| DomainError::InvalidWeight(trimmed.to_string()))?;
        Self::new(kg)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
