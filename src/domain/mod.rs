//! # Domain Layer
//!
//! Shipments, prices, labels and promotions, free of any transport or
//! configuration concern.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
