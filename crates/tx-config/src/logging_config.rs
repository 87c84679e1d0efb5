use crate::LogLevel;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file path relative to the config directory; None logs to the
    /// terminal.
    pub file: Option<String>,
}
