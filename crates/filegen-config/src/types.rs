//! Core configuration types

use serde::{Deserialize, Serialize};

/// Top-level filegen configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FilegenConfig {
    /// Defaults applied when documents are composed
    pub document: DocumentConfig,
    /// Defaults applied when documents are written
    pub write: WriteConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

/// Document composition defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DocumentConfig {
    /// Append a single trailing newline to non-empty composed contents
    pub end_with_newline: bool,
}

/// Write sink defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WriteConfig {
    /// Temporarily clear read-only destinations and restore them afterwards
    pub unlock: bool,
    /// Create missing parent directories instead of failing
    pub create_parent_directories: bool,
    /// Resolve destinations without touching the filesystem
    pub dry_run: bool,
    /// Mark written files read-only
    pub read_only: Option<bool>,
    /// Unix permission bits applied to written files
    pub mode: Option<u32>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`debug`, `info`, `warn`, `error`)
    pub level: String,
    /// Include the event target in formatted output
    pub with_target: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            end_with_newline: true,
        }
    }
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            unlock: true,
            create_parent_directories: false,
            dry_run: false,
            read_only: None,
            mode: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}
