//! # Infrastructure
//!
//! Process-level concerns: configuration loading and log setup.

pub mod config;
pub mod logging;

pub use config::{AppConfig, LogFormat, LoggingConfig, ServerConfig};
pub use logging::init_tracing;
