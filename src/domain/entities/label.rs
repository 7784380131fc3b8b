//! # Label
//!
//! Rendered shipping label and order summary, and the parcel they describe.
//!
//! A label is not tied to a priced tier: when the requested service code
//! names no known tier, the label still renders with the raw code and no
//! price.

use crate::domain::entities::quote::Quote;
use crate::domain::entities::shipment::normalized_parties;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Money, Weight};
use serde::{Deserialize, Serialize};

/// Printable shipping label plus a one-line order recap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    /// Multi-line, fixed-layout label text.
    pub label_text: String,
    /// Short prose summary of the order.
    pub summary_text: String,
}

/// The parcel a label is printed for.
///
/// # Invariants
///
/// - `recipient`, `address` and `service_code` are non-blank and trimmed
/// - `price` is present exactly when `service_code` is a known tier
///
/// # Examples
///
/// ```
/// use freight_quote::domain::entities::LabelSubject;
/// use freight_quote::domain::value_objects::Weight;
/// use rust_decimal::Decimal;
///
/// let weight = Weight::new(Decimal::new(2, 0)).unwrap();
/// let subject = LabelSubject::unpriced("Ana", "Rua A, 123", weight, " XYZ ").unwrap();
/// assert_eq!(subject.service_code(), "XYZ");
/// assert!(subject.price().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LabelSubject {
    recipient: String,
    address: String,
    weight: Weight,
    service_code: String,
    price: Option<Money>,
}

impl LabelSubject {
    /// Creates a subject for a service code with no tariff tier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRecipient`, `DomainError::EmptyAddress` or
    /// `DomainError::MissingServiceType` if a text field is blank.
    pub fn unpriced(
        recipient: impl Into<String>,
        address: impl Into<String>,
        weight: Weight,
        service_code: &str,
    ) -> DomainResult<Self> {
        let (recipient, address) = normalized_parties(recipient.into(), address.into())?;
        let service_code = service_code.trim();
        if service_code.is_empty() {
            return Err(DomainError::MissingServiceType);
        }
        Ok(Self {
            recipient,
            address,
            weight,
            service_code: service_code.to_string(),
            price: None,
        })
    }

    /// Returns the consignee name.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the delivery address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the parcel weight.
    #[must_use]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the service code, canonical for known tiers and as given otherwise.
    #[must_use]
    pub fn service_code(&self) -> &str {
        &self.service_code
    }

    /// Returns the freight price, absent for unknown service codes.
    #[must_use]
    pub const fn price(&self) -> Option<Money> {
        self.price
    }
}

impl From<&Quote> for LabelSubject {
    fn from(quote: &Quote) -> Self {
        let shipment = quote.shipment();
        Self {
            recipient: shipment.recipient().to_string(),
            address: shipment.address().to_string(),
            weight: shipment.weight(),
            service_code: shipment.service_type().code().to_string(),
            price: Some(quote.price()),
        }
    }
}
