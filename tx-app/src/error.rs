use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] tx_config::ConfigError),

    #[error(transparent)]
    Store(#[from] tx_store::StoreError),

    #[error(transparent)]
    Profile(#[from] tx_profile::ProfileError),

    #[error(transparent)]
    Auth(#[from] tx_auth::AuthError),

    #[error(transparent)]
    Image(#[from] tx_form::ImageError),

    #[error("Failed to read {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("No declared form field named {field:?} {location}")]
    UnknownField {
        field: String,
        location: ErrorLocation,
    },

    #[error("Unknown image slot {slot:?}; expected profile-photo, profile-banner, company-logo or company-banner {location}")]
    UnknownSlot {
        slot: String,
        location: ErrorLocation,
    },

    #[error("Not logged in; sign in or register first {location}")]
    NoSession { location: ErrorLocation },
}

impl AppError {
    /// Creates FileRead error at caller location.
    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Logger error at caller location.
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnknownField error at caller location.
    #[track_caller]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnknownSlot error at caller location.
    #[track_caller]
    pub fn unknown_slot(slot: impl Into<String>) -> Self {
        Self::UnknownSlot {
            slot: slot.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NoSession error at caller location.
    #[track_caller]
    pub fn no_session() -> Self {
        Self::NoSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
