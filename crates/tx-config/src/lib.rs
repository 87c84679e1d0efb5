mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use auth_config::{AuthConfig, CredentialEntry};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const DEFAULT_STORAGE_FILENAME: &str = "profiles.json";
const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;
const MIN_QUOTA_BYTES: usize = 4 * 1024;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
