//! # Promotion Comparison
//!
//! Side-by-side view of a shipment's regular and promotional quotes.

use crate::domain::entities::quote::Quote;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::Money;
use serde::Serialize;

/// Result of evaluating the promotion rules against a shipment.
///
/// # Invariants
///
/// - `promotional` is present if and only if `applied` is true
/// - `savings = original.price - promotional.price`, floored at zero, when
///   applied; zero otherwise
///
/// # Examples
///
/// ```
/// use freight_quote::domain::entities::{PromotionComparison, Quote, Shipment};
/// use freight_quote::domain::value_objects::{Money, ServiceType, Weight};
/// use rust_decimal::Decimal;
///
/// let shipment = Shipment::new(
///     "Ana",
///     "Rua A, 123",
///     Weight::new(Decimal::new(5, 0)).unwrap(),
///     ServiceType::Standard,
/// )
/// .unwrap();
/// let original = Quote::new(shipment, Money::from_decimal(Decimal::new(20, 0)).unwrap());
///
/// let comparison = PromotionComparison::not_applied(original);
/// assert!(!comparison.applied());
/// assert!(comparison.promotional().is_none());
/// assert!(comparison.savings().is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromotionComparison {
    original: Quote,
    promotional: Option<Quote>,
    savings: Money,
}

impl PromotionComparison {
    /// Builds a comparison where a promotion applied.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if the savings computation fails.
    pub fn applied_with(original: Quote, promotional: Quote) -> DomainResult<Self> {
        let savings = original
            .price()
            .saturating_difference(promotional.price())?;
        Ok(Self {
            original,
            promotional: Some(promotional),
            savings,
        })
    }

    /// Builds a comparison where no promotion applied.
    #[must_use]
    pub fn not_applied(original: Quote) -> Self {
        Self {
            original,
            promotional: None,
            savings: Money::ZERO,
        }
    }

    /// Returns true if a promotion applied.
    #[inline]
    #[must_use]
    pub fn applied(&self) -> bool {
        self.promotional.is_some()
    }

    /// Returns the regular quote.
    #[inline]
    #[must_use]
    pub fn original(&self) -> &Quote {
        &self.original
    }

    /// Returns the promotional quote, if a promotion applied.
    #[inline]
    #[must_use]
    pub fn promotional(&self) -> Option<&Quote> {
        self.promotional.as_ref()
    }

    /// Returns how much the promotion saves.
    #[inline]
    #[must_use]
    pub const fn savings(&self) -> Money {
        self.savings
    }
}
