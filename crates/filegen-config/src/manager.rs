//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    logging::LogLevel,
    types::FilegenConfig,
};

/// Loads, saves and validates [`FilegenConfig`]
///
/// Sources are layered: an optional TOML file, then environment variables
/// with the configured prefix (`FILEGEN__WRITE__UNLOCK=false`).
pub struct ConfigManager {
    config_path: PathBuf,
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager reading the default config path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "FILEGEN".to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: "FILEGEN".to_string(),
        }
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Path of the TOML file this manager reads and writes
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("filegen")
            .join("config.toml")
    }

    /// Load the layered configuration
    ///
    /// A missing file is not an error; defaults fill every absent key.
    pub fn load(&self) -> Result<FilegenConfig> {
        debug!(path = %self.config_path.display(), "Loading filegen config");

        let settings = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: FilegenConfig = settings.try_deserialize()?;
        self.validate(&config)?;
        Ok(config)
    }

    /// Write the configuration as TOML, creating the parent directory
    pub fn save(&self, config: &FilegenConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    /// Check values the type system cannot express
    pub fn validate(&self, config: &FilegenConfig) -> Result<()> {
        if LogLevel::parse(&config.logging.level).is_none() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                config.logging.level
            )));
        }
        if let Some(mode) = config.write.mode {
            if mode > 0o7777 {
                return Err(ConfigError::Validation(format!(
                    "File mode out of range: {:o}",
                    mode
                )));
            }
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("absent.toml"))
            .with_env_prefix("FILEGEN_TEST_MISSING");

        let config = manager.load().unwrap();
        assert_eq!(config, FilegenConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[document]\nend_with_newline = false\n\n[write]\ncreate_parent_directories = true\n",
        )
        .unwrap();

        let config = ConfigManager::with_path(&path)
            .with_env_prefix("FILEGEN_TEST_PARTIAL")
            .load()
            .unwrap();

        assert!(!config.document.end_with_newline);
        assert!(config.write.create_parent_directories);
        assert!(config.write.unlock);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("nested/config.toml"))
            .with_env_prefix("FILEGEN_TEST_SAVE");

        let mut config = FilegenConfig::default();
        config.write.unlock = false;
        config.write.mode = Some(0o644);
        config.logging.level = "debug".to_string();

        manager.save(&config).unwrap();
        assert!(manager.config_path().exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let manager = ConfigManager::new();
        let mut config = FilegenConfig::default();
        config.logging.level = "loud".to_string();

        assert!(matches!(
            manager.validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_large_mode() {
        let manager = ConfigManager::new();
        let mut config = FilegenConfig::default();
        config.write.mode = Some(0o17777);

        assert!(manager.validate(&config).is_err());
    }
}
