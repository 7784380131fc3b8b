//! # Application Layer
//!
//! Use cases exposed to the boundary adapters.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{LabeledShipment, QuoteService, ServiceOffering, ShipmentInput};
