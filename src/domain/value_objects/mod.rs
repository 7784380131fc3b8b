//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Numeric Types
//!
//! - [`Money`]: Non-negative amount rounded to cents
//! - [`Weight`]: Strictly positive weight in kilograms
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//! - [`round_cents`]: Round-half-up to two fractional digits
//!
//! ## Domain Enums
//!
//! - [`ServiceType`]: Express, Standard or Economy freight tier

pub mod arithmetic;
pub mod money;
pub mod service_type;
pub mod weight;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, round_cents};
pub use money::Money;
pub use service_type::ServiceType;
pub use weight::{MAX_WEIGHT_KG, Weight};
