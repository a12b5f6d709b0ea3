//! Configuration for filegen
//!
//! Holds the serde types describing document defaults, write behavior and
//! logging, a manager that loads them from TOML files and the environment,
//! and the `tracing` subscriber setup.

pub mod error;
pub mod logging;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use logging::{init_logging, LogLevel};
pub use manager::ConfigManager;
pub use types::{DocumentConfig, FilegenConfig, LoggingConfig, WriteConfig};
