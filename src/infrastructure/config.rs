//! # Service Configuration
//!
//! Layered configuration for the freight quote service.
//!
//! Sources, later ones overriding earlier ones:
//!
//! ```text
//! built-in defaults → TOML file → FREIGHT__* environment variables
//! ```
//!
//! The tariff and promotion sections are validated when the
//! [`QuoteService`] is built; an invalid table is a configuration error and
//! the service must not start.
//!
//! # Examples
//!
//! ```
//! use freight_quote::infrastructure::config::AppConfig;
//!
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     [tariff.express]
//!     base_fee = 20
//!     per_kg_rate = 3
//!
//!     [tariff.standard]
//!     base_fee = 10
//!     per_kg_rate = 2
//!
//!     [promotion.discount]
//!     kind = "percentage"
//!     percent = 50
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.server.port, 5000);
//! let service = config.build_quote_service().unwrap();
//! assert_eq!(service.service_catalog().len(), 3);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::QuoteService;
use crate::domain::errors::DomainResult;
use crate::domain::services::{
    DEFAULT_PROMOTION_WEIGHT_THRESHOLD_KG, Discount, FreightCalculator, PromotionEngine, Tariff,
    TariffRate, WeightThresholdPromotion,
};
use crate::domain::value_objects::Weight;
use config::{Config, Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Configuration file read when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/freight";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "FREIGHT";

/// Default listen port.
const DEFAULT_PORT: u16 = 5000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
    /// Per-tier pricing.
    pub tariff: TariffConfig,
    /// Promotion policy.
    pub promotion: PromotionConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "freight_quote=info,tower_http=info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Base fee and per-kg rate for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Fixed fee; may be negative.
    pub base_fee: Decimal,
    /// Price per kilogram; must not be negative.
    pub per_kg_rate: Decimal,
}

impl RateConfig {
    fn to_rate(self) -> DomainResult<TariffRate> {
        TariffRate::new(self.base_fee, self.per_kg_rate)
    }
}

/// Rates for every tier.
///
/// Defaults reproduce the historical tariff: Express `1.5/kg + 10`,
/// Standard `1.2/kg`, Economy `1.1/kg - 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffConfig {
    /// Express (`EXP`) tier.
    pub express: RateConfig,
    /// Standard (`PAD`) tier.
    pub standard: RateConfig,
    /// Economy (`ECO`) tier.
    pub economy: RateConfig,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            express: RateConfig {
                base_fee: Decimal::TEN,
                per_kg_rate: Decimal::new(15, 1),
            },
            standard: RateConfig {
                base_fee: Decimal::ZERO,
                per_kg_rate: Decimal::new(12, 1),
            },
            economy: RateConfig {
                base_fee: Decimal::new(-5, 0),
                per_kg_rate: Decimal::new(11, 1),
            },
        }
    }
}

impl TariffConfig {
    /// Builds the validated tariff.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTariff` for negative per-kg rates or
    /// misordered tiers.
    pub fn to_tariff(&self) -> DomainResult<Tariff> {
        Tariff::new(
            self.express.to_rate()?,
            self.standard.to_rate()?,
            self.economy.to_rate()?,
        )
    }
}

/// Promotion policy.
///
/// Defaults to the historical rule: shipments over 10 kg are priced as if
/// they were 1 kg lighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionConfig {
    /// When false, no shipment ever qualifies.
    pub enabled: bool,
    /// Weight a shipment must strictly exceed.
    pub weight_threshold_kg: Decimal,
    /// Discount applied to qualifying shipments.
    pub discount: Discount,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            weight_threshold_kg: DEFAULT_PROMOTION_WEIGHT_THRESHOLD_KG,
            discount: Discount::WeightReduction { kg: Decimal::ONE },
        }
    }
}

impl PromotionConfig {
    /// Builds the promotion engine.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPromotion` if the discount does not fit
    /// the threshold, or `DomainError::InvalidWeight` for a non-positive
    /// threshold.
    pub fn to_engine(&self) -> DomainResult<PromotionEngine> {
        if !self.enabled {
            return Ok(PromotionEngine::disabled());
        }
        let threshold = Weight::new(self.weight_threshold_kg)?;
        let rule = WeightThresholdPromotion::new(threshold, self.discount)?;
        Ok(PromotionEngine::new(vec![Arc::new(rule)]))
    }
}

impl AppConfig {
    /// Loads configuration from defaults, a TOML file and the environment.
    ///
    /// With `path` set the file must exist; otherwise
    /// [`DEFAULT_CONFIG_PATH`] is read if present.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source cannot be read
    /// or does not match the expected shape.
    pub fn load(path: Option<&Path>) -> ApplicationResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };
        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?;
        config.try_deserialize().map_err(config_error)
    }

    /// Parses configuration from a TOML document over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the document is not
    /// valid TOML or does not match the expected shape.
    pub fn from_toml_str(toml: &str) -> ApplicationResult<Self> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error)
    }

    /// Builds the quote service from the tariff and promotion sections.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if either section is invalid.
    pub fn build_quote_service(&self) -> ApplicationResult<QuoteService> {
        let tariff = self.tariff.to_tariff().map_err(invalid_section)?;
        let promotions = self.promotion.to_engine().map_err(invalid_section)?;
        Ok(QuoteService::new(FreightCalculator::new(tariff), promotions))
    }
}

fn config_error(err: config::ConfigError) -> ApplicationError {
    ApplicationError::configuration(err.to_string())
}

fn invalid_section(err: crate::domain::errors::DomainError) -> ApplicationError {
    ApplicationError::configuration(err.to_string())
}
