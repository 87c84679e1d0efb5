use crate::{AuthConfig, ConfigError, ConfigErrorResult, LogLevel, LoggingConfig, StorageConfig};

use std::path::PathBuf;
use std::str::FromStr;

use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for TX_CONFIG_DIR env var, else use ./.thrivex/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TX_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TX_CONFIG_DIR env var > ./.thrivex/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("TX_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".thrivex"))
    }

    /// Apply TX_* environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("TX_STORAGE_PATH") {
            self.storage.path = path;
        }

        if let Ok(quota) = std::env::var("TX_STORAGE_QUOTA_BYTES") {
            match quota.parse::<usize>() {
                Ok(bytes) => self.storage.quota_bytes = bytes,
                Err(_) => warn!("Ignoring non-numeric TX_STORAGE_QUOTA_BYTES: {quota}"),
            }
        }

        if let Ok(level) = std::env::var("TX_LOG_LEVEL") {
            // FromStr never fails; unknown values fall back to info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }

        if let Ok(file) = std::env::var("TX_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Validate storage path doesn't escape config dir
        let store_path = std::path::Path::new(&self.storage.path);
        if store_path.is_absolute() || self.storage.path.contains("..") {
            return Err(ConfigError::storage(
                "storage.path must be relative and cannot contain '..'",
            ));
        }
        if self.storage.path.is_empty() {
            return Err(ConfigError::storage("storage.path must not be empty"));
        }

        if self.storage.quota_bytes != 0 && self.storage.quota_bytes < crate::MIN_QUOTA_BYTES {
            return Err(ConfigError::storage(format!(
                "storage.quota_bytes must be 0 (unlimited) or at least {} bytes",
                crate::MIN_QUOTA_BYTES
            )));
        }

        for entry in &self.auth.credentials {
            if entry.email.trim().is_empty() || !entry.email.contains('@') {
                return Err(ConfigError::auth(format!(
                    "auth.credentials contains an invalid email: {:?}",
                    entry.email
                )));
            }
            if entry.password.is_empty() {
                return Err(ConfigError::auth(format!(
                    "auth.credentials entry for {} has an empty password",
                    entry.email
                )));
            }
        }

        Ok(())
    }

    /// Get absolute path to the store file.
    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.path))
    }

    /// Get absolute path to the log file, if one is configured.
    pub fn log_file_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        match &self.logging.file {
            Some(file) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(file)))
            }
            None => Ok(None),
        }
    }
}
