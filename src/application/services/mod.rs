//! # Application Services
//!
//! - [`QuoteService`]: Facade for the calculate, label and
//!   compare-promotions operations

pub mod quote_service;

pub use quote_service::{LabeledShipment, QuoteService, ServiceOffering, ShipmentInput};
