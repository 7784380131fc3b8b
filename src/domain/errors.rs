//! # Domain Errors
//!
//! Failures raised by domain validation and pricing.
//!
//! Errors fall into two groups:
//! - validation failures, caused by caller-supplied shipment data
//! - configuration failures, caused by an invalid tariff or promotion policy

use crate::domain::value_objects::arithmetic::ArithmeticError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Recipient is missing or blank.
    #[error("recipient must not be empty")]
    EmptyRecipient,

    /// Address is missing or blank.
    #[error("address must not be empty")]
    EmptyAddress,

    /// Weight is missing, not a number, or not positive.
    #[error("weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(String),

    /// Weight exceeds the accepted maximum.
    #[error("weight must not exceed {max} kg, got {kg}")]
    WeightAboveLimit {
        /// Requested weight.
        kg: Decimal,
        /// Accepted maximum.
        max: Decimal,
    },

    /// Service type code is missing or blank.
    #[error("service type must not be empty")]
    MissingServiceType,

    /// Service type code is not one of `EXP`, `PAD`, `ECO`.
    #[error("unknown service type: {0}")]
    UnknownServiceType(String),

    /// Required request field is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Monetary amount would be negative.
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// Tariff table is incomplete or inconsistent.
    #[error("invalid tariff: {0}")]
    InvalidTariff(String),

    /// Promotion policy is inconsistent.
    #[error("invalid promotion: {0}")]
    InvalidPromotion(String),

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid tariff error.
    #[must_use]
    pub fn invalid_tariff(message: impl Into<String>) -> Self {
        Self::InvalidTariff(message.into())
    }

    /// Creates an invalid promotion error.
    #[must_use]
    pub fn invalid_promotion(message: impl Into<String>) -> Self {
        Self::InvalidPromotion(message.into())
    }

    /// Returns true if the error was caused by caller-supplied input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyRecipient
                | Self::EmptyAddress
                | Self::InvalidWeight(_)
                | Self::WeightAboveLimit { .. }
                | Self::MissingServiceType
                | Self::UnknownServiceType(_)
                | Self::MissingField(_)
                | Self::NegativeAmount(_)
        )
    }

    /// Returns true if the error points at the tariff or promotion setup.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidTariff(_) | Self::InvalidPromotion(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
