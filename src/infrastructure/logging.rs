//! # Logging
//!
//! `tracing` subscriber setup.
//!
//! `RUST_LOG` wins over the configured filter so operators can raise
//! verbosity without touching the config file.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::infrastructure::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the event filter from `RUST_LOG` or the configured directive.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the configured directive
/// does not parse.
pub fn env_filter(config: &LoggingConfig) -> ApplicationResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| {
            ApplicationError::configuration(format!(
                "invalid log filter {:?}: {e}",
                config.filter
            ))
        }),
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the filter is invalid or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> ApplicationResult<()> {
    let filter = env_filter(config)?;

    let (json, pretty) = match config.format {
        LogFormat::Json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true),
            ),
            None,
        ),
        LogFormat::Pretty => (None, Some(tracing_subscriber::fmt::layer().with_target(true))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .try_init()
        .map_err(|e| ApplicationError::configuration(format!("tracing init failed: {e}")))
}
