//! # Freight Calculator
//!
//! Prices a [`Shipment`] against an injected [`Tariff`].
//!
//! # Pricing Formula
//!
//! ```text
//! price = round_half_up(base_fee + weight_kg * per_kg_rate, 2), floored at 0.00
//! ```
//!
//! The tariff is configuration: the calculator holds no constants of its
//! own, so re-tariffing never needs a code change.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::Shipment;
//! use freight_quote::domain::services::freight_calculator::{FreightCalculator, Tariff, TariffRate};
//! use freight_quote::domain::value_objects::{ServiceType, Weight};
//! use rust_decimal::Decimal;
//!
//! let tariff = Tariff::new(
//!     TariffRate::new(Decimal::new(20, 0), Decimal::new(3, 0)).unwrap(),
//!     TariffRate::new(Decimal::new(10, 0), Decimal::new(2, 0)).unwrap(),
//!     TariffRate::new(Decimal::new(5, 0), Decimal::new(1, 0)).unwrap(),
//! )
//! .unwrap();
//! let calculator = FreightCalculator::new(tariff);
//!
//! let shipment = Shipment::new(
//!     "Ana",
//!     "Rua A, 123",
//!     Weight::new(Decimal::new(12, 0)).unwrap(),
//!     ServiceType::Standard,
//! )
//! .unwrap();
//!
//! let quote = calculator.calculate(&shipment).unwrap();
//! assert_eq!(quote.price().to_string(), "34.00");
//! ```

use crate::domain::entities::{Quote, Shipment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::{MAX_WEIGHT_KG, Money, ServiceType, Weight};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest accepted per-kilogram rate.
///
/// Together with [`MAX_WEIGHT_KG`] this bounds `weight * per_kg_rate` well
/// inside decimal range.
pub const MAX_PER_KG_RATE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Base fee and per-kilogram rate for one service tier.
///
/// The base fee may be negative (a rebate on light parcels); the per-kg
/// rate may not, so price never decreases as weight grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TariffRate {
    base_fee: Decimal,
    per_kg_rate: Decimal,
}

impl TariffRate {
    /// Creates a rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTariff` if `per_kg_rate` is negative or
    /// above [`MAX_PER_KG_RATE`].
    pub fn new(base_fee: Decimal, per_kg_rate: Decimal) -> DomainResult<Self> {
        if per_kg_rate.is_sign_negative() && !per_kg_rate.is_zero() {
            return Err(DomainError::invalid_tariff(format!(
                "per-kg rate must not be negative, got {per_kg_rate}"
            )));
        }
        if per_kg_rate > MAX_PER_KG_RATE {
            return Err(DomainError::invalid_tariff(format!(
                "per-kg rate must not exceed {MAX_PER_KG_RATE}, got {per_kg_rate}"
            )));
        }
        Ok(Self {
            base_fee,
            per_kg_rate,
        })
    }

    /// Returns the fixed fee added to every shipment.
    #[inline]
    #[must_use]
    pub const fn base_fee(&self) -> Decimal {
        self.base_fee
    }

    /// Returns the price per kilogram.
    #[inline]
    #[must_use]
    pub const fn per_kg_rate(&self) -> Decimal {
        self.per_kg_rate
    }

    /// Prices a weight under this rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on decimal overflow.
    pub fn price_for(&self, weight: Weight) -> DomainResult<Money> {
        let variable = weight.kg().safe_mul(self.per_kg_rate)?;
        let total = variable.safe_add(self.base_fee)?;
        Ok(Money::clamped(total))
    }

    /// Returns this rate with both components multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow, or
    /// `DomainError::InvalidTariff` if `factor` is negative.
    pub fn scaled(&self, factor: Decimal) -> DomainResult<Self> {
        Self::new(
            self.base_fee.safe_mul(factor)?,
            self.per_kg_rate.safe_mul(factor)?,
        )
    }

    /// Returns this rate with the base fee lowered by `amount`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on underflow.
    pub fn with_base_reduced_by(&self, amount: Decimal) -> DomainResult<Self> {
        Self::new(self.base_fee.safe_sub(amount)?, self.per_kg_rate)
    }
}

impl fmt::Display for TariffRate {
    /// Renders the formula the way the service catalogue shows it,
    /// e.g. `peso * 1.5 + R$10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rate = self.per_kg_rate.normalize();
        let base = self.base_fee.normalize();
        if base.is_zero() {
            write!(f, "peso * {rate}")
        } else if base.is_sign_negative() {
            write!(f, "peso * {rate} - R${}", base.abs())
        } else {
            write!(f, "peso * {rate} + R${base}")
        }
    }
}

/// Rates for every service tier.
///
/// # Invariants
///
/// - Express ≥ Standard ≥ Economy, on both base fee and per-kg rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tariff {
    express: TariffRate,
    standard: TariffRate,
    economy: TariffRate,
}

impl Tariff {
    /// Creates a tariff, checking the tier ordering.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTariff` if a cheaper tier has a higher
    /// base fee or per-kg rate than a more expensive one.
    pub fn new(
        express: TariffRate,
        standard: TariffRate,
        economy: TariffRate,
    ) -> DomainResult<Self> {
        check_tier_order("EXP", &express, "PAD", &standard)?;
        check_tier_order("PAD", &standard, "ECO", &economy)?;
        Ok(Self {
            express,
            standard,
            economy,
        })
    }

    /// Returns the rate for a service tier.
    #[must_use]
    pub const fn rate(&self, service_type: ServiceType) -> &TariffRate {
        match service_type {
            ServiceType::Express => &self.express,
            ServiceType::Standard => &self.standard,
            ServiceType::Economy => &self.economy,
        }
    }

    /// Returns a tariff with every rate multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow, or
    /// `DomainError::InvalidTariff` if `factor` is negative.
    pub fn scaled(&self, factor: Decimal) -> DomainResult<Self> {
        Self::new(
            self.express.scaled(factor)?,
            self.standard.scaled(factor)?,
            self.economy.scaled(factor)?,
        )
    }

    /// Returns a tariff with every base fee lowered by `amount`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on underflow.
    pub fn with_base_reduced_by(&self, amount: Decimal) -> DomainResult<Self> {
        Self::new(
            self.express.with_base_reduced_by(amount)?,
            self.standard.with_base_reduced_by(amount)?,
            self.economy.with_base_reduced_by(amount)?,
        )
    }
}

fn check_tier_order(
    higher_code: &str,
    higher: &TariffRate,
    lower_code: &str,
    lower: &TariffRate,
) -> DomainResult<()> {
    if higher.base_fee < lower.base_fee || higher.per_kg_rate < lower.per_kg_rate {
        return Err(DomainError::invalid_tariff(format!(
            "{higher_code} must not be cheaper than {lower_code}"
        )));
    }
    Ok(())
}

/// Prices shipments under a fixed tariff.
///
/// Holds no mutable state: one instance can serve any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreightCalculator {
    tariff: Tariff,
}

impl FreightCalculator {
    /// Creates a calculator for the given tariff.
    #[must_use]
    pub const fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    /// Returns the tariff in use.
    #[inline]
    #[must_use]
    pub const fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Returns a calculator for a different tariff.
    #[must_use]
    pub const fn with_tariff(&self, tariff: Tariff) -> Self {
        Self::new(tariff)
    }

    /// Prices a shipment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on decimal overflow.
    pub fn calculate(&self, shipment: &Shipment) -> DomainResult<Quote> {
        let rate = self.tariff.rate(shipment.service_type());
        let price = rate.price_for(shipment.weight())?;
        Ok(Quote::new(shipment.clone(), price))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rate(base: i64, per_kg: i64) -> TariffRate {
        TariffRate::new(Decimal::new(base, 0), Decimal::new(per_kg, 0)).unwrap()
    }

    fn test_tariff() -> Tariff {
        Tariff::new(rate(20, 3), rate(10, 2), rate(5, 1)).unwrap()
    }

    fn shipment(kg: Decimal, service_type: ServiceType) -> Shipment {
        Shipment::new("Ana", "Rua A, 123", Weight::new(kg).unwrap(), service_type).unwrap()
    }

    mod tariff_rate {
        use super::*;

        #[test]
        fn negative_per_kg_rejected() {
            let err = TariffRate::new(Decimal::TEN, Decimal::new(-1, 0)).unwrap_err();
            assert!(err.is_configuration());
        }

        #[test]
        fn per_kg_above_limit_rejected() {
            assert_eq!(MAX_PER_KG_RATE, Decimal::new(1_000_000_000_000, 0));
            assert!(TariffRate::new(Decimal::ZERO, MAX_PER_KG_RATE).is_ok());
            let err = TariffRate::new(Decimal::ZERO, MAX_PER_KG_RATE + Decimal::ONE).unwrap_err();
            assert!(err.is_configuration());
        }

        #[test]
        fn heaviest_parcel_at_highest_rate_prices() {
            let rate = TariffRate::new(Decimal::new(-5, 0), MAX_PER_KG_RATE).unwrap();
            let price = rate.price_for(Weight::new(MAX_WEIGHT_KG).unwrap()).unwrap();
            assert_eq!(price.get(), MAX_WEIGHT_KG * MAX_PER_KG_RATE - Decimal::new(5, 0));
        }

        #[test]
        fn negative_base_allowed() {
            assert!(TariffRate::new(Decimal::new(-5, 0), Decimal::ONE).is_ok());
        }

        #[test]
        fn price_floors_at_zero() {
            let rebate = TariffRate::new(Decimal::new(-5, 0), Decimal::new(11, 1)).unwrap();
            let weight = Weight::new(Decimal::new(2, 0)).unwrap();
            assert_eq!(rebate.price_for(weight).unwrap(), Money::ZERO);
        }

        #[test]
        fn scaled_halves_both_components() {
            let half = rate(10, 2).scaled(Decimal::new(5, 1)).unwrap();
            assert_eq!(half.base_fee(), Decimal::new(5, 0));
            assert_eq!(half.per_kg_rate(), Decimal::ONE);
        }

        #[test]
        fn display_formula() {
            assert_eq!(
                TariffRate::new(Decimal::TEN, Decimal::new(15, 1)).unwrap().to_string(),
                "peso * 1.5 + R$10"
            );
            assert_eq!(
                TariffRate::new(Decimal::ZERO, Decimal::new(12, 1)).unwrap().to_string(),
                "peso * 1.2"
            );
            assert_eq!(
                TariffRate::new(Decimal::new(-5, 0), Decimal::new(11, 1))
                    .unwrap()
                    .to_string(),
                "peso * 1.1 - R$5"
            );
        }
    }

    mod tariff {
        use super::*;

        #[test]
        fn out_of_order_tiers_rejected() {
            let err = Tariff::new(rate(5, 1), rate(10, 2), rate(5, 1)).unwrap_err();
            assert!(err.is_configuration());
            assert!(err.to_string().contains("EXP"));
        }

        #[test]
        fn economy_above_standard_rejected() {
            assert!(Tariff::new(rate(20, 3), rate(10, 2), rate(5, 4)).is_err());
        }

        #[test]
        fn equal_tiers_allowed() {
            assert!(Tariff::new(rate(10, 2), rate(10, 2), rate(10, 2)).is_ok());
        }

        #[test]
        fn rate_lookup() {
            let tariff = test_tariff();
            assert_eq!(tariff.rate(ServiceType::Express), &rate(20, 3));
            assert_eq!(tariff.rate(ServiceType::Standard), &rate(10, 2));
            assert_eq!(tariff.rate(ServiceType::Economy), &rate(5, 1));
        }

        #[test]
        fn base_reduction_applies_to_all_tiers() {
            let reduced = test_tariff().with_base_reduced_by(Decimal::new(4, 0)).unwrap();
            assert_eq!(reduced.rate(ServiceType::Express).base_fee(), Decimal::new(16, 0));
            assert_eq!(reduced.rate(ServiceType::Economy).base_fee(), Decimal::ONE);
        }
    }

    mod calculate {
        use super::*;

        #[test]
        fn standard_twelve_kg() {
            let calculator = FreightCalculator::new(test_tariff());
            let quote = calculator
                .calculate(&shipment(Decimal::new(12, 0), ServiceType::Standard))
                .unwrap();
            assert_eq!(quote.price().to_string(), "34.00");
            assert_eq!(quote.shipment().recipient(), "Ana");
        }

        #[test]
        fn tiers_ordered_by_cost() {
            let calculator = FreightCalculator::new(test_tariff());
            let kg = Decimal::new(7, 0);
            let exp = calculator.calculate(&shipment(kg, ServiceType::Express)).unwrap();
            let pad = calculator.calculate(&shipment(kg, ServiceType::Standard)).unwrap();
            let eco = calculator.calculate(&shipment(kg, ServiceType::Economy)).unwrap();
            assert!(exp.price() > pad.price());
            assert!(pad.price() > eco.price());
        }

        #[test]
        fn rounds_half_up() {
            let tariff = Tariff::new(
                TariffRate::new(Decimal::ZERO, Decimal::new(15, 1)).unwrap(),
                TariffRate::new(Decimal::ZERO, Decimal::new(12, 1)).unwrap(),
                TariffRate::new(Decimal::ZERO, Decimal::new(11, 1)).unwrap(),
            )
            .unwrap();
            let calculator = FreightCalculator::new(tariff);
            // 1.0125 kg * 1.2 = 1.215
            let quote = calculator
                .calculate(&shipment(Decimal::new(10125, 4), ServiceType::Standard))
                .unwrap();
            assert_eq!(quote.price().to_string(), "1.22");
        }

        #[test]
        fn heavier_never_cheaper() {
            let calculator = FreightCalculator::new(test_tariff());
            let light = calculator
                .calculate(&shipment(Decimal::new(3, 0), ServiceType::Economy))
                .unwrap();
            let heavy = calculator
                .calculate(&shipment(Decimal::new(30, 0), ServiceType::Economy))
                .unwrap();
            assert!(heavy.price() >= light.price());
        }

        #[test]
        fn with_tariff_reprices() {
            let calculator = FreightCalculator::new(test_tariff());
            let half = calculator.with_tariff(test_tariff().scaled(Decimal::new(5, 1)).unwrap());
            let quote = half
                .calculate(&shipment(Decimal::new(12, 0), ServiceType::Standard))
                .unwrap();
            assert_eq!(quote.price().to_string(), "17.00");
        }
    }
}
