//! Configuration error types

use thiserror::Error;

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Layered sources could not be loaded or deserialized
    #[error("Load error: {0}")]
    Load(#[from] config::ConfigError),

    /// The config could not be rendered as TOML
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A loaded value is out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// The global subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}
