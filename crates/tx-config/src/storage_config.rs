use crate::{DEFAULT_QUOTA_BYTES, DEFAULT_STORAGE_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Store filename, relative to the config directory.
    pub path: String,
    /// Byte budget for the whole key space. 0 disables the quota.
    pub quota_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_STORAGE_FILENAME),
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}
