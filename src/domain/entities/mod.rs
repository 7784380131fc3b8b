//! # Domain Entities
//!
//! Request-scoped values built fresh for every operation.
//!
//! - [`Shipment`]: Validated parcel description
//! - [`Quote`]: Shipment paired with its price
//! - [`PromotionComparison`]: Regular vs promotional quote
//! - [`Label`]: Shipping label and order summary
//! - [`LabelSubject`]: The parcel a label describes, priced or not

pub mod label;
pub mod promotion_comparison;
pub mod quote;
pub mod shipment;

pub use label::{Label, LabelSubject};
pub use promotion_comparison::PromotionComparison;
pub use quote::Quote;
pub use shipment::Shipment;
