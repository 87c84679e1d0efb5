//! Single-file persistent store.
//!
//! The whole key space is serialized as one pretty-printed JSON object.
//! Writes go through a temp-file + fsync + atomic-rename sequence so a
//! crash mid-write never leaves a half-written store on disk. An
//! unparseable store file is backed up and replaced with an empty one
//! rather than blocking startup.

use crate::kv::projected_usage;
use crate::{DEFAULT_QUOTA_BYTES, KeyValueStore, Result, StoreError};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    quota_bytes: usize,
}

impl FileStore {
    /// Opens the store at `path` with the default quota.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_quota(path, DEFAULT_QUOTA_BYTES)
    }

    /// Opens the store at `path`. 0 disables the quota.
    ///
    /// A missing file yields an empty store. A file that exists but does
    /// not parse is renamed to `<name>.corrupted.<timestamp>` and the
    /// store starts empty; corrupt data never blocks startup.
    pub fn open_with_quota(path: impl Into<PathBuf>, quota_bytes: usize) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            info!("No store file at {path:?}, starting empty");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
                quota_bytes,
            });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;

        let entries = match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => {
                info!("Loaded {} keys from {path:?}", entries.len());
                entries
            }
            Err(e) => {
                warn!("Store file corrupted at {path:?}: {e}");
                backup_corrupted(&path)?;
                BTreeMap::new()
            }
        };

        Ok(Self {
            path,
            entries,
            quota_bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current byte usage (keys + values).
    pub fn usage_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Writes the full key space to disk.
    ///
    /// 1. Writes to a temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to the final location
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::dir_creation(parent.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;

        let temp_path = self.path.with_extension(format!("tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let projected = projected_usage(&self.entries, key, value);
        if self.quota_bytes > 0 && projected > self.quota_bytes {
            return Err(StoreError::quota_exceeded(projected, self.quota_bytes));
        }

        let prior = self.entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.persist() {
            // Failed writes must not change what a reader observes.
            match prior {
                Some(old) => {
                    self.entries.insert(key.to_string(), old);
                }
                None => {
                    self.entries.remove(key);
                }
            }
            return Err(e);
        }

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.entries.remove(key)?;
        if let Err(e) = self.persist() {
            // Removal sticks in memory; the next successful persist
            // carries it to disk.
            warn!("Failed to persist removal of {key:?}: {e}");
        }
        Some(removed)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Renames an unparseable store file to `<name>.corrupted.<timestamp>`
/// so it is kept for debugging.
fn backup_corrupted(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let timestamp = chrono::Utc::now().format(DATE_FORMAT);
    let backup_path = path.with_extension(format!("corrupted.{timestamp}"));

    fs::rename(path, &backup_path)
        .map_err(|e| StoreError::atomic_rename(path.to_path_buf(), backup_path.clone(), e))?;

    warn!("Backed up corrupted store to {backup_path:?}");
    Ok(Some(backup_path))
}
