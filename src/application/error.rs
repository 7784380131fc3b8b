//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Validation(String)     - Malformed, missing or out-of-range input
//! ├── Configuration(String)  - Tariff or promotion policy invalid at startup
//! └── Internal(String)       - Arithmetic failures valid input should never hit
//! ```
//!
//! Transport failures belong to the boundary adapter and have no variant here.
//!
//! # Examples
//!
//! ```
//! use freight_quote::application::error::ApplicationError;
//! use freight_quote::domain::errors::DomainError;
//!
//! let err = ApplicationError::validation("weight must be positive");
//! assert!(err.is_validation());
//!
//! let err: ApplicationError = DomainError::invalid_tariff("negative rate").into();
//! assert!(err.is_configuration());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Tariff or promotion configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns the message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::Configuration(message) | Self::Internal(message) => {
                message
            }
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        if err.is_validation() {
            Self::Validation(err.to_string())
        } else if err.is_configuration() {
            Self::Configuration(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
