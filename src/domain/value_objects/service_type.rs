//! # Service Type
//!
//! Freight service tiers and their wire codes.
//!
//! | Tier       | Wire code | Display name |
//! |------------|-----------|--------------|
//! | `Express`  | `EXP`     | Expresso     |
//! | `Standard` | `PAD`     | Padrão       |
//! | `Economy`  | `ECO`     | Econômico    |

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Freight service tier.
///
/// Ordered from most to least expensive. Serializes as the wire code.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::ServiceType;
///
/// let tier: ServiceType = " exp ".parse().unwrap();
/// assert_eq!(tier, ServiceType::Express);
/// assert_eq!(tier.code(), "EXP");
/// assert_eq!(tier.display_name(), "Expresso");
///
/// assert!("XYZ".parse::<ServiceType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum ServiceType {
    /// Fastest delivery, highest tariff.
    Express = 0,
    /// Regular delivery.
    Standard = 1,
    /// Slowest delivery, lowest tariff.
    Economy = 2,
}

impl ServiceType {
    /// All tiers, most expensive first.
    pub const ALL: [Self; 3] = [Self::Express, Self::Standard, Self::Economy];

    /// Returns the wire code (`EXP`, `PAD`, `ECO`).
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Express => "EXP",
            Self::Standard => "PAD",
            Self::Economy => "ECO",
        }
    }

    /// Returns the human-readable name shown on labels.
    #[inline]
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Express => "Expresso",
            Self::Standard => "Padrão",
            Self::Economy => "Econômico",
        }
    }

    /// Returns the tier for a wire code, if known.
    ///
    /// Matching ignores case and surrounding whitespace.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "EXP" => Some(Self::Express),
            "PAD" => Some(Self::Standard),
            "ECO" => Some(Self::Economy),
            _ => None,
        }
    }
}

/// Display name for a raw wire code.
///
/// Unknown codes pass through unchanged rather than failing, so a caller
/// rendering data it did not validate still shows something sensible.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::service_type::display_name_for_code;
///
/// assert_eq!(display_name_for_code("PAD"), "Padrão");
/// assert_eq!(display_name_for_code("XYZ"), "XYZ");
/// ```
#[must_use]
pub fn display_name_for_code(code: &str) -> &str {
    match ServiceType::from_code(code) {
        Some(tier) => tier.display_name(),
        None => code,
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::MissingServiceType);
        }
        Self::from_code(s).ok_or_else(|| DomainError::UnknownServiceType(s.to_string()))
    }
}

impl TryFrom<String> for ServiceType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ServiceType> for &'static str {
    fn from(value: ServiceType) -> Self {
        value.code()
    }
}
