//! # Promotion Engine
//!
//! Decides whether promotions apply to a shipment and, if so, prices the
//! shipment again under the discounted terms for comparison.
//!
//! This module provides:
//! - [`PromotionRule`]: Trait for pluggable promotion policies
//! - [`WeightThresholdPromotion`]: Applies a [`Discount`] above a weight threshold
//! - [`PromotionEngine`]: Runs an ordered chain of rules
//!
//! # Rule Chain
//!
//! ```text
//! terms = (shipment, tariff)
//! for rule in rules:
//!     if rule.is_eligible(terms.shipment): terms = rule.apply(terms)
//! promotional = calculate(terms.shipment) under terms.tariff
//! ```
//!
//! Each rule sees the output of the previous one. The comparison reports
//! `applied` when at least one rule was eligible.

use crate::domain::entities::{PromotionComparison, Shipment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::freight_calculator::{FreightCalculator, Tariff};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::Weight;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Weight above which the default promotion applies, in kilograms.
///
/// The comparison is strict: a 10 kg parcel does not qualify.
pub const DEFAULT_PROMOTION_WEIGHT_THRESHOLD_KG: Decimal = Decimal::TEN;

/// The shipment and tariff a promotional price is computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTerms {
    /// Shipment as seen by the promotional quote.
    pub shipment: Shipment,
    /// Tariff the promotional quote is priced under.
    pub tariff: Tariff,
}

/// Discount transform applied when a promotion is eligible.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::services::promotion::Discount;
/// use rust_decimal::Decimal;
///
/// let half_off = Discount::Percentage { percent: Decimal::new(50, 0) };
/// assert_eq!(half_off.to_string(), "50% off");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discount {
    /// Scales base fee and per-kg rate of every tier down by this percentage.
    Percentage {
        /// Percentage taken off, in (0, 100].
        percent: Decimal,
    },
    /// Prices the shipment as if it were this many kilograms lighter.
    WeightReduction {
        /// Kilograms removed; must stay below the rule threshold.
        kg: Decimal,
    },
    /// Lowers every tier's base fee by this amount.
    FlatAmount {
        /// Amount taken off each base fee.
        amount: Decimal,
    },
}

impl Discount {
    /// Applies the transform to the pricing terms.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeight` if a weight reduction would leave
    /// a non-positive weight, or `DomainError::Arithmetic` on overflow.
    pub fn apply(&self, terms: PricingTerms) -> DomainResult<PricingTerms> {
        match *self {
            Self::Percentage { percent } => {
                let remaining = Decimal::ONE_HUNDRED.safe_sub(percent)?;
                let factor = remaining.safe_div(Decimal::ONE_HUNDRED)?;
                Ok(PricingTerms {
                    tariff: terms.tariff.scaled(factor)?,
                    ..terms
                })
            }
            Self::WeightReduction { kg } => {
                let lighter = terms.shipment.weight().reduced_by(kg)?;
                Ok(PricingTerms {
                    shipment: terms.shipment.with_weight(lighter),
                    ..terms
                })
            }
            Self::FlatAmount { amount } => Ok(PricingTerms {
                tariff: terms.tariff.with_base_reduced_by(amount)?,
                ..terms
            }),
        }
    }

    fn validate(&self, threshold: Weight) -> DomainResult<()> {
        match *self {
            Self::Percentage { percent } => {
                if percent <= Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
                    return Err(DomainError::invalid_promotion(format!(
                        "percentage must be in (0, 100], got {percent}"
                    )));
                }
            }
            Self::WeightReduction { kg } => {
                if kg <= Decimal::ZERO || kg >= threshold.kg() {
                    return Err(DomainError::invalid_promotion(format!(
                        "weight reduction must be positive and below the {threshold} kg threshold, got {kg}"
                    )));
                }
            }
            Self::FlatAmount { amount } => {
                if amount.is_sign_negative() && !amount.is_zero() {
                    return Err(DomainError::invalid_promotion(format!(
                        "flat amount must not be negative, got {amount}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage { percent } => write!(f, "{}% off", percent.normalize()),
            Self::WeightReduction { kg } => write!(f, "{} kg off", kg.normalize()),
            Self::FlatAmount { amount } => write!(f, "R${} off", amount.normalize()),
        }
    }
}

/// A promotion policy.
///
/// Implementations decide eligibility from the shipment alone and describe
/// the discount as a transform of the pricing terms.
pub trait PromotionRule: Send + Sync + fmt::Debug {
    /// Returns true if the promotion applies to this shipment.
    fn is_eligible(&self, shipment: &Shipment) -> bool;

    /// Transforms the pricing terms.
    ///
    /// Only called for eligible shipments.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the transform cannot be applied.
    fn apply(&self, terms: PricingTerms) -> DomainResult<PricingTerms>;

    /// Returns the name of this rule.
    fn name(&self) -> &'static str;
}

/// Applies a discount to shipments strictly heavier than a threshold.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::services::promotion::{
///     Discount, PromotionRule, WeightThresholdPromotion,
/// };
/// use rust_decimal::Decimal;
///
/// let rule =
///     WeightThresholdPromotion::with_default_threshold(Discount::WeightReduction { kg: Decimal::ONE })
///         .unwrap();
/// assert_eq!(rule.threshold().to_string(), "10");
/// assert_eq!(rule.name(), "WeightThreshold");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightThresholdPromotion {
    threshold: Weight,
    discount: Discount,
}

impl WeightThresholdPromotion {
    /// Creates a rule with a custom threshold.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPromotion` if the discount is
    /// inconsistent with the threshold (see [`Discount`]).
    pub fn new(threshold: Weight, discount: Discount) -> DomainResult<Self> {
        discount.validate(threshold)?;
        Ok(Self {
            threshold,
            discount,
        })
    }

    /// Creates a rule using [`DEFAULT_PROMOTION_WEIGHT_THRESHOLD_KG`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPromotion` if the discount is invalid.
    pub fn with_default_threshold(discount: Discount) -> DomainResult<Self> {
        Self::new(Weight::new(DEFAULT_PROMOTION_WEIGHT_THRESHOLD_KG)?, discount)
    }

    /// Returns the weight a shipment must exceed.
    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> Weight {
        self.threshold
    }

    /// Returns the discount applied to eligible shipments.
    #[inline]
    #[must_use]
    pub const fn discount(&self) -> Discount {
        self.discount
    }
}

impl PromotionRule for WeightThresholdPromotion {
    fn is_eligible(&self, shipment: &Shipment) -> bool {
        shipment.weight() > self.threshold
    }

    fn apply(&self, terms: PricingTerms) -> DomainResult<PricingTerms> {
        self.discount.apply(terms)
    }

    fn name(&self) -> &'static str {
        "WeightThreshold"
    }
}

/// Evaluates an ordered chain of promotion rules.
///
/// Holds only immutable rules; evaluating the same shipment twice yields
/// identical comparisons.
#[derive(Debug, Clone, Default)]
pub struct PromotionEngine {
    rules: Vec<Arc<dyn PromotionRule>>,
}

impl PromotionEngine {
    /// Creates an engine running `rules` in order.
    #[must_use]
    pub fn new(rules: Vec<Arc<dyn PromotionRule>>) -> Self {
        Self { rules }
    }

    /// Creates an engine with no rules; nothing is ever eligible.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Compares the regular quote with the promotional one.
    ///
    /// The regular quote is always computed, so callers can report the
    /// current price when no promotion applies.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if pricing or a rule transform fails.
    pub fn evaluate(
        &self,
        shipment: &Shipment,
        calculator: &FreightCalculator,
    ) -> DomainResult<PromotionComparison> {
        let original = calculator.calculate(shipment)?;

        let mut terms = PricingTerms {
            shipment: shipment.clone(),
            tariff: *calculator.tariff(),
        };
        let mut applied = false;
        for rule in &self.rules {
            if rule.is_eligible(&terms.shipment) {
                tracing::debug!(rule = rule.name(), %shipment, "promotion rule eligible");
                terms = rule.apply(terms)?;
                applied = true;
            }
        }

        if !applied {
            return Ok(PromotionComparison::not_applied(original));
        }

        let promotional = calculator
            .with_tariff(terms.tariff)
            .calculate(&terms.shipment)?;
        if promotional.price() > original.price() {
            tracing::warn!(
                original = %original.price(),
                promotional = %promotional.price(),
                "promotion raised the price, savings floored at zero"
            );
        }
        PromotionComparison::applied_with(original, promotional)
    }
}
