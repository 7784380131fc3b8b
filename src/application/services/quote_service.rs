//! # Quote Service
//!
//! Facade over the freight calculator, label composer and promotion engine.
//!
//! Every operation follows the same shape:
//!
//! ```text
//! ShipmentInput ──validate──▶ Shipment ──delegate──▶ domain service ──▶ result
//!                   │
//!                   └── ApplicationError::Validation (nothing computed)
//! ```
//!
//! The service is immutable once built. Share it behind an `Arc`; concurrent
//! calls never interfere and identical inputs yield identical outputs.
//!
//! # Examples
//!
//! ```
//! use freight_quote::application::{QuoteService, ShipmentInput};
//! use freight_quote::domain::services::{FreightCalculator, PromotionEngine, Tariff, TariffRate};
//! use rust_decimal::Decimal;
//!
//! let tariff = Tariff::new(
//!     TariffRate::new(Decimal::new(20, 0), Decimal::new(3, 0)).unwrap(),
//!     TariffRate::new(Decimal::new(10, 0), Decimal::new(2, 0)).unwrap(),
//!     TariffRate::new(Decimal::new(5, 0), Decimal::new(1, 0)).unwrap(),
//! )
//! .unwrap();
//! let service = QuoteService::new(FreightCalculator::new(tariff), PromotionEngine::disabled());
//!
//! let input = ShipmentInput::new("Ana", "Rua A, 123", "12", "PAD");
//! let quote = service.calculate(&input).unwrap();
//! assert_eq!(quote.price().to_string(), "34.00");
//!
//! let bad = ShipmentInput::new("Ana", "Rua A, 123", "0", "PAD");
//! assert!(service.calculate(&bad).unwrap_err().is_validation());
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{Label, LabelSubject, PromotionComparison, Quote, Shipment};
use crate::domain::errors::DomainError;
use crate::domain::services::{FreightCalculator, LabelComposer, PromotionEngine};
use crate::domain::value_objects::{ServiceType, Weight};
use tracing::instrument;

/// Raw shipment fields as received at the boundary.
///
/// Nothing here is validated; [`QuoteService::validate`] turns it into a
/// [`Shipment`] or a validation error. The weight is kept as text so the
/// adapter never rounds it through a binary float.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentInput {
    /// Consignee name.
    pub recipient: Option<String>,
    /// Delivery address.
    pub address: Option<String>,
    /// Weight in kilograms, decimal or scientific notation.
    pub weight: Option<String>,
    /// Service type wire code (`EXP`, `PAD`, `ECO`).
    pub service_type: Option<String>,
}

impl ShipmentInput {
    /// Creates an input with every field present.
    #[must_use]
    pub fn new(
        recipient: impl Into<String>,
        address: impl Into<String>,
        weight: impl Into<String>,
        service_type: impl Into<String>,
    ) -> Self {
        Self {
            recipient: Some(recipient.into()),
            address: Some(address.into()),
            weight: Some(weight.into()),
            service_type: Some(service_type.into()),
        }
    }
}

/// A rendered label together with the parcel it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledShipment {
    /// The parcel, priced when its service code is a known tier.
    pub subject: LabelSubject,
    /// The rendered label and summary.
    pub label: Label,
}

/// One entry of the service catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    /// The service tier.
    pub service_type: ServiceType,
    /// Pricing formula under the configured tariff, e.g. `peso * 1.2`.
    pub description: String,
}

/// Facade exposing the calculate, label and compare-promotions operations.
#[derive(Debug, Clone)]
pub struct QuoteService {
    calculator: FreightCalculator,
    composer: LabelComposer,
    promotions: PromotionEngine,
}

impl QuoteService {
    /// Creates a quote service.
    #[must_use]
    pub fn new(calculator: FreightCalculator, promotions: PromotionEngine) -> Self {
        Self {
            calculator,
            composer: LabelComposer::new(),
            promotions,
        }
    }

    /// Validates raw input into a [`Shipment`].
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` if a field is missing, blank,
    /// not a positive weight, or an unknown service type code.
    pub fn validate(&self, input: &ShipmentInput) -> ApplicationResult<Shipment> {
        let fields = RequiredFields::from_input(input)?;
        let service_type: ServiceType = fields.service_code.parse()?;
        Ok(Shipment::new(
            fields.recipient,
            fields.address,
            fields.weight,
            service_type,
        )?)
    }

    /// Prices a shipment.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for invalid input, or
    /// `ApplicationError::Internal` on arithmetic overflow.
    #[instrument(skip_all, fields(service_type = ?input.service_type))]
    pub fn calculate(&self, input: &ShipmentInput) -> ApplicationResult<Quote> {
        let shipment = self.validate(input).inspect_err(log_rejection)?;
        let quote = self.calculator.calculate(&shipment)?;
        tracing::debug!(%quote, "freight calculated");
        Ok(quote)
    }

    /// Prices a shipment and renders its label and summary.
    ///
    /// Unlike the other operations, an unknown service code is not an
    /// error here: the label shows the raw code and carries no price.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` if a field is missing or
    /// blank, or the weight is invalid. Returns `ApplicationError::Internal`
    /// on arithmetic overflow.
    #[instrument(skip_all, fields(service_type = ?input.service_type))]
    pub fn label(&self, input: &ShipmentInput) -> ApplicationResult<LabeledShipment> {
        let subject = self.label_subject(input).inspect_err(log_rejection)?;
        let label = self.composer.compose(&subject);
        tracing::debug!(service_code = subject.service_code(), "label composed");
        Ok(LabeledShipment { subject, label })
    }

    fn label_subject(&self, input: &ShipmentInput) -> ApplicationResult<LabelSubject> {
        let fields = RequiredFields::from_input(input)?;
        match fields.service_code.parse::<ServiceType>() {
            Ok(service_type) => {
                let shipment = Shipment::new(
                    fields.recipient,
                    fields.address,
                    fields.weight,
                    service_type,
                )?;
                let quote = self.calculator.calculate(&shipment)?;
                Ok(LabelSubject::from(&quote))
            }
            Err(DomainError::UnknownServiceType(code)) => {
                tracing::info!(service_code = %code, "labelling unknown service type without price");
                Ok(LabelSubject::unpriced(
                    fields.recipient,
                    fields.address,
                    fields.weight,
                    &code,
                )?)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Compares the regular quote with the promotional one.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for invalid input, or
    /// `ApplicationError::Internal` if a promotion transform fails.
    #[instrument(skip_all, fields(service_type = ?input.service_type))]
    pub fn compare_promotions(
        &self,
        input: &ShipmentInput,
    ) -> ApplicationResult<PromotionComparison> {
        let shipment = self.validate(input).inspect_err(log_rejection)?;
        let comparison = self.promotions.evaluate(&shipment, &self.calculator)?;
        if comparison.applied() {
            tracing::info!(
                %shipment,
                savings = %comparison.savings(),
                "promotion applied"
            );
        } else {
            tracing::debug!(%shipment, "no promotion applicable");
        }
        Ok(comparison)
    }

    /// Lists every service tier with its pricing formula.
    #[must_use]
    pub fn service_catalog(&self) -> Vec<ServiceOffering> {
        ServiceType::ALL
            .into_iter()
            .map(|service_type| ServiceOffering {
                service_type,
                description: self.calculator.tariff().rate(service_type).to_string(),
            })
            .collect()
    }
}

/// Fields every operation requires, with the weight parsed.
struct RequiredFields<'a> {
    recipient: &'a str,
    address: &'a str,
    weight: Weight,
    service_code: &'a str,
}

impl<'a> RequiredFields<'a> {
    fn from_input(input: &'a ShipmentInput) -> ApplicationResult<Self> {
        let recipient = input
            .recipient
            .as_deref()
            .ok_or(DomainError::MissingField("recipient"))?;
        let address = input
            .address
            .as_deref()
            .ok_or(DomainError::MissingField("address"))?;
        let weight: Weight = input
            .weight
            .as_deref()
            .ok_or(DomainError::MissingField("weight"))?
            .parse()?;
        let service_code = input
            .service_type
            .as_deref()
            .ok_or(DomainError::MissingServiceType)?;
        Ok(Self {
            recipient,
            address,
            weight,
            service_code,
        })
    }
}

fn log_rejection(err: &ApplicationError) {
    tracing::debug!(error = %err, "shipment rejected");
}
