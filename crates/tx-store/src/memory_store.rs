use crate::kv::projected_usage;
use crate::{KeyValueStore, Result, StoreError};

use std::collections::BTreeMap;

/// In-memory store, used by tests and as an ephemeral session store.
///
/// Quota semantics are identical to `FileStore` so test behavior matches
/// production behavior.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota_bytes: usize,
}

impl MemoryStore {
    /// Unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store refusing writes that would push total usage past
    /// `quota_bytes`. 0 disables the quota.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota_bytes,
        }
    }

    /// Current byte usage (keys + values).
    pub fn usage_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let projected = projected_usage(&self.entries, key, value);
        if self.quota_bytes > 0 && projected > self.quota_bytes {
            return Err(StoreError::quota_exceeded(projected, self.quota_bytes));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
