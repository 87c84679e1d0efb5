use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please fill in both email and password {location}")]
    MissingCredentials { location: ErrorLocation },

    // One variant for unknown identity and wrong password alike; the
    // distinction is deliberately not exposed.
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Please fill in all fields {location}")]
    MissingFields { location: ErrorLocation },

    #[error("Passwords do not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Password must be at least {minimum} characters long {location}")]
    PasswordTooShort {
        minimum: usize,
        location: ErrorLocation,
    },

    #[error("An account with email {email} already exists {location}")]
    AccountExists {
        email: String,
        location: ErrorLocation,
    },

    #[error("Failed to store profile at registration: {source} {location}")]
    Storage {
        #[source]
        source: tx_profile::ProfileError,
        location: ErrorLocation,
    },

    #[error("Failed to update session pointer: {source} {location}")]
    Session {
        #[source]
        source: tx_store::StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable code for client display / logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredentials { .. } => "MISSING_CREDENTIALS",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::MissingFields { .. } => "MISSING_FIELDS",
            Self::PasswordMismatch { .. } => "PASSWORD_MISMATCH",
            Self::PasswordTooShort { .. } => "PASSWORD_TOO_SHORT",
            Self::AccountExists { .. } => "ACCOUNT_EXISTS",
            Self::Storage { .. } => "STORAGE_FAILED",
            Self::Session { .. } => "SESSION_FAILED",
        }
    }

    /// The text shown to the user, without diagnostic decoration.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredentials { .. } => {
                String::from("Please fill in both email and password.")
            }
            Self::InvalidCredentials { .. } => String::from("Invalid email or password."),
            Self::MissingFields { .. } => String::from("Please fill in all fields."),
            Self::PasswordMismatch { .. } => String::from("Passwords do not match."),
            Self::PasswordTooShort { minimum, .. } => {
                format!("Password must be at least {minimum} characters long.")
            }
            Self::AccountExists { .. } => String::from(
                "An account with this email already exists. \
                 Please use a different email or sign in.",
            ),
            Self::Storage { source, .. } => {
                format!("Registration failed. {}", source.recovery_hint())
            }
            Self::Session { source, .. } => {
                format!("Could not update your session. {}", source.recovery_hint())
            }
        }
    }

    /// Field-check failures, surfaced synchronously before any state
    /// mutation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials { .. }
                | Self::MissingFields { .. }
                | Self::PasswordMismatch { .. }
                | Self::PasswordTooShort { .. }
                | Self::AccountExists { .. }
        )
    }

    /// Creates MissingCredentials error at caller location.
    #[track_caller]
    pub fn missing_credentials() -> Self {
        Self::MissingCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidCredentials error at caller location.
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates MissingFields error at caller location.
    #[track_caller]
    pub fn missing_fields() -> Self {
        Self::MissingFields {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates PasswordMismatch error at caller location.
    #[track_caller]
    pub fn password_mismatch() -> Self {
        Self::PasswordMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates PasswordTooShort error at caller location.
    #[track_caller]
    pub fn password_too_short(minimum: usize) -> Self {
        Self::PasswordTooShort {
            minimum,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AccountExists error at caller location.
    #[track_caller]
    pub fn account_exists(email: impl Into<String>) -> Self {
        Self::AccountExists {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Storage error at caller location.
    #[track_caller]
    pub fn storage(source: tx_profile::ProfileError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Session error at caller location.
    #[track_caller]
    pub fn session(source: tx_store::StoreError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
