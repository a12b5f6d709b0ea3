//! Logging initialization
//!
//! Library crates only emit `tracing` events. Binaries and tests that want
//! to see them call [`init_logging`] once; `RUST_LOG` takes precedence over
//! the configured level.

use tracing_subscriber::EnvFilter;

use crate::{
    error::{ConfigError, Result},
    types::LoggingConfig,
};

/// Minimum log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse log level from string, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" => Some(LogLevel::Trace),
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARN" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Directive understood by [`EnvFilter`]
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Install a global fmt subscriber for the configured level
///
/// Calling this more than once is harmless: a subscriber that is already
/// installed is left in place.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = LogLevel::parse(&config.level)
        .ok_or_else(|| ConfigError::Logging(format!("Unknown log level: {}", config.level)))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    // try_init only fails when a global subscriber already exists
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init();

    Ok(())
}
