//! # Quote Entity
//!
//! A shipment paired with its computed freight price.

use crate::domain::entities::shipment::Shipment;
use crate::domain::value_objects::Money;
use serde::Serialize;
use std::fmt;

/// A priced shipment.
///
/// Built by the freight calculator; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Quote {
    shipment: Shipment,
    price: Money,
}

impl Quote {
    /// Creates a quote.
    #[must_use]
    pub fn new(shipment: Shipment, price: Money) -> Self {
        Self { shipment, price }
    }

    /// Returns the priced shipment.
    #[inline]
    #[must_use]
    pub fn shipment(&self) -> &Shipment {
        &self.shipment
    }

    /// Returns the freight price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quote({} @ {})", self.shipment, self.price.display_brl())
    }
}
