use crate::Result;

/// A string-keyed, string-valued persistent store scoped to one user's
/// installation: the seam the profile and session layers write through.
///
/// Operations are synchronous. Reads cannot fail; writes are
/// capacity-bounded and report `StoreError::QuotaExceeded` when the
/// projected usage would pass the configured quota, leaving the prior
/// value for the key in place.
pub trait KeyValueStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`, returning the value it held.
    fn remove(&mut self, key: &str) -> Option<String>;

    /// Number of stored keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Projected byte usage of a map after writing `key` = `value`.
///
/// Usage is counted as the sum of key and value lengths, the same
/// accounting browsers apply to origin storage.
pub(crate) fn projected_usage(
    entries: &std::collections::BTreeMap<String, String>,
    key: &str,
    value: &str,
) -> usize {
    let current: usize = entries.iter().map(|(k, v)| k.len() + v.len()).sum();
    match entries.get(key) {
        Some(old) => current - old.len() + value.len(),
        None => current + key.len() + value.len(),
    }
}
