//! # Freight Quote
//!
//! Freight pricing, shipping-label composition and promotion comparison.
//!
//! Given a shipment (recipient, address, weight, service tier) the service
//! deterministically produces:
//!
//! - a price under a configurable [`Tariff`](domain::services::Tariff)
//! - a printable label and order summary
//! - a comparison between the regular and the promotional price
//!
//! # Architecture
//!
//! ```text
//! api::rest ──▶ application::QuoteService ──▶ domain::services
//!                     ▲                         ├── FreightCalculator
//!                     │                         ├── LabelComposer
//!   infrastructure::config (tariff, promotion)  └── PromotionEngine
//! ```
//!
//! All core operations are synchronous and pure: the tariff and promotion
//! policy are loaded once at startup and never mutated.
//!
//! # Example
//!
//! ```
//! use freight_quote::application::ShipmentInput;
//! use freight_quote::infrastructure::AppConfig;
//!
//! let service = AppConfig::default().build_quote_service().unwrap();
//! let comparison = service
//!     .compare_promotions(&ShipmentInput::new("Ana", "Rua A, 123", "12", "PAD"))
//!     .unwrap();
//! assert!(comparison.applied());
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
