//! Profile repository over the key-value store.
//!
//! Loading is recoverable-by-default: a missing or corrupt stored value
//! yields an empty record and never raises, so a bad entry cannot block
//! page rendering. Saving is a wholesale replacement of the stored
//! record and surfaces failures to the caller for user-visible
//! notification.

use crate::{LoadedProfile, ProfileError, Result, user_key};

use tx_core::ProfileRecord;
use tx_store::KeyValueStore;

use log::{debug, warn};

pub struct ProfileRepository<'a, S: KeyValueStore> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore> ProfileRepository<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Loads the record stored for `identity`.
    ///
    /// Returns:
    /// - stored and parseable: the record, normalized
    /// - nothing stored: the default record
    /// - stored but unparseable: the default record, with the parse
    ///   error in `recovered_from` and a warning logged
    pub fn load(&self, identity: &str) -> LoadedProfile {
        let key = user_key(identity);

        let Some(raw) = self.store.get(&key) else {
            debug!("No saved record for {identity}");
            return LoadedProfile::default();
        };

        match serde_json::from_str::<ProfileRecord>(&raw) {
            Ok(mut record) => {
                record.normalize();
                LoadedProfile {
                    record,
                    recovered_from: None,
                }
            }
            Err(e) => {
                warn!("Stored record for {identity} is unreadable, starting fresh: {e}");
                LoadedProfile {
                    record: ProfileRecord::default(),
                    recovered_from: Some(e.to_string()),
                }
            }
        }
    }

    /// Serializes `record` and stores it under `user_{identity}`,
    /// replacing the prior record wholesale. No retry on failure; the
    /// caller keeps the in-memory record and may try again.
    pub fn save(&mut self, identity: &str, record: &ProfileRecord) -> Result<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| ProfileError::serialization(identity, e))?;

        self.store
            .set(&user_key(identity), &json)
            .map_err(|e| ProfileError::store(identity, e))?;

        debug!("Saved record for {identity}");
        Ok(())
    }

    /// The registration skeleton (§ lifecycle: created implicitly on
    /// first successful registration).
    pub fn create_default(first_name: &str, last_name: &str, email: &str) -> ProfileRecord {
        ProfileRecord::registration(first_name, last_name, email)
    }

    /// Whether any record is stored for `identity`, readable or not.
    pub fn exists(&self, identity: &str) -> bool {
        self.store.contains_key(&user_key(identity))
    }
}
