//! # Domain Services
//!
//! Stateless pricing logic over the domain entities.
//!
//! - [`FreightCalculator`]: Prices a shipment under a [`Tariff`]
//! - [`LabelComposer`]: Renders labels and order summaries
//! - [`PromotionEngine`]: Compares regular and promotional quotes

pub mod freight_calculator;
pub mod label_composer;
pub mod promotion;

pub use freight_calculator::{FreightCalculator, MAX_PER_KG_RATE, Tariff, TariffRate};
pub use label_composer::LabelComposer;
pub use promotion::{
    DEFAULT_PROMOTION_WEIGHT_THRESHOLD_KG, Discount, PricingTerms, PromotionEngine,
    PromotionRule, WeightThresholdPromotion,
};
