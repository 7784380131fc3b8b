//! # Shipment Entity
//!
//! The normalized description of a parcel to ship.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::Shipment;
//! use freight_quote::domain::value_objects::{ServiceType, Weight};
//! use rust_decimal::Decimal;
//!
//! let shipment = Shipment::new(
//!     "Ana",
//!     "Rua A, 123",
//!     Weight::new(Decimal::new(12, 0)).unwrap(),
//!     ServiceType::Standard,
//! )
//! .unwrap();
//!
//! assert_eq!(shipment.recipient(), "Ana");
//! assert!(Shipment::new("  ", "Rua A", shipment.weight(), ServiceType::Economy).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ServiceType, Weight};
use serde::Serialize;
use std::fmt;

/// A parcel to ship.
///
/// # Invariants
///
/// - `recipient` and `address` are non-blank; surrounding whitespace is trimmed
/// - `weight` is strictly positive (enforced by [`Weight`])
/// - `service_type` is a known tier (enforced by [`ServiceType`])
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Shipment {
    recipient: String,
    address: String,
    weight: Weight,
    service_type: ServiceType,
}

impl Shipment {
    /// Creates a shipment with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRecipient` or `DomainError::EmptyAddress`
    /// if either text field is blank after trimming.
    pub fn new(
        recipient: impl Into<String>,
        address: impl Into<String>,
        weight: Weight,
        service_type: ServiceType,
    ) -> DomainResult<Self> {
        let (recipient, address) = normalized_parties(recipient.into(), address.into())?;

        Ok(Self {
            recipient,
            address,
            weight,
            service_type,
        })
    }

    /// Returns the consignee name.
    #[inline]
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the delivery address.
    #[inline]
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the parcel weight.
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the service tier.
    #[inline]
    #[must_use]
    pub const fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Returns a copy of this shipment with a different weight.
    #[must_use]
    pub fn with_weight(&self, weight: Weight) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }
}

/// Trims recipient and address, rejecting either if blank.
pub(crate) fn normalized_parties(
    recipient: String,
    address: String,
) -> DomainResult<(String, String)> {
    let recipient = recipient.trim().to_string();
    if recipient.is_empty() {
        return Err(DomainError::EmptyRecipient);
    }
    let address = address.trim().to_string();
    if address.is_empty() {
        return Err(DomainError::EmptyAddress);
    }
    Ok((recipient, address))
}

impl fmt::Display for Shipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shipment({} {}kg to {})",
            self.service_type, self.weight, self.recipient
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn weight(kg: i64) -> Weight {
        Weight::new(Decimal::new(kg, 0)).unwrap()
    }

    #[test]
    fn trims_text_fields() {
        let shipment =
            Shipment::new("  Ana ", "\tRua A, 123\n", weight(3), ServiceType::Express).unwrap();
        assert_eq!(shipment.recipient(), "Ana");
        assert_eq!(shipment.address(), "Rua A, 123");
    }

    #[test]
    fn blank_recipient_rejected() {
        let err = Shipment::new("", "Rua A", weight(1), ServiceType::Economy).unwrap_err();
        assert_eq!(err, DomainError::EmptyRecipient);
    }

    #[test]
    fn blank_address_rejected() {
        let err = Shipment::new("Ana", "   ", weight(1), ServiceType::Economy).unwrap_err();
        assert_eq!(err, DomainError::EmptyAddress);
    }

    #[test]
    fn with_weight_keeps_other_fields() {
        let shipment = Shipment::new("Ana", "Rua A", weight(12), ServiceType::Standard).unwrap();
        let lighter = shipment.with_weight(weight(11));
        assert_eq!(lighter.recipient(), "Ana");
        assert_eq!(lighter.service_type(), ServiceType::Standard);
        assert_eq!(lighter.weight(), weight(11));
        assert_eq!(shipment.weight(), weight(12));
    }

    #[test]
    fn display() {
        let shipment = Shipment::new("Ana", "Rua A", weight(12), ServiceType::Standard).unwrap();
        assert_eq!(shipment.to_string(), "Shipment(PAD 12kg to Ana)");
    }
}
