use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use tx_store::StoreError;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to store profile for {identity}: {source} {location}")]
    Store {
        identity: String,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Failed to serialize profile for {identity}: {source} {location}")]
    Serialization {
        identity: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl ProfileError {
    /// Whether retrying the save without changes can succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Store { source, .. } => source.is_transient(),
            Self::Serialization { .. } => false,
        }
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Store { source, .. } => source.recovery_hint(),
            Self::Serialization { .. } => {
                "Internal error preparing profile data. \
                   Please report this issue."
            }
        }
    }

    /// Creates Store error at caller location.
    #[track_caller]
    pub fn store(identity: impl Into<String>, source: StoreError) -> Self {
        Self::Store {
            identity: identity.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Serialization error at caller location.
    #[track_caller]
    pub fn serialization(identity: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            identity: identity.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
