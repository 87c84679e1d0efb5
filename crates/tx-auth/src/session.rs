//! Session gate: the single `currentUser` pointer and the operations
//! that move it.

use crate::{Access, AuthError, CredentialVerifier, PageKind, Result};

use tx_core::split_display_name;
use tx_profile::{CURRENT_USER_KEY, ProfileRepository, user_key};
use tx_store::KeyValueStore;

use log::info;

/// Registration validation floor.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct SessionManager<'a, S: KeyValueStore> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore> SessionManager<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// The active identity, if any.
    pub fn current_identity(&self) -> Option<String> {
        self.store
            .get(CURRENT_USER_KEY)
            .filter(|identity| !identity.is_empty())
    }

    /// Gates `kind` against the current session.
    ///
    /// "No session" on a gated page is a redirect, never a render with
    /// an empty identity - callers must treat these as distinct states.
    pub fn require_session(&self, kind: PageKind) -> Access {
        match self.current_identity() {
            Some(identity) => Access::Granted(identity),
            None if kind.requires_session() => {
                info!("No session for {}, redirecting to login", kind.path());
                Access::RedirectToLogin
            }
            None => Access::Anonymous,
        }
    }

    /// Checks `email`/`password` against the verifier and establishes a
    /// session on match.
    ///
    /// The email is trimmed, the password never is. Mismatches come back
    /// as one generic error regardless of which side was wrong.
    pub fn login(
        &mut self,
        verifier: &dyn CredentialVerifier,
        email: &str,
        password: &str,
    ) -> Result<String> {
        let email = email.trim();

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::missing_credentials());
        }

        if !verifier.verify(email, password) {
            info!("Login failed for {email}");
            return Err(AuthError::invalid_credentials());
        }

        self.store
            .set(CURRENT_USER_KEY, email)
            .map_err(AuthError::session)?;

        info!("Login successful for {email}");
        Ok(email.to_string())
    }

    /// Clears the session pointer and returns the identity it named.
    ///
    /// The identity's stored record is retained; logging out never
    /// deletes profile data.
    pub fn logout(&mut self) -> Option<String> {
        let prior = self.store.remove(CURRENT_USER_KEY);
        if let Some(ref identity) = prior {
            info!("Logged out {identity}");
        }
        prior
    }

    /// Validates the registration form, creates the default record for
    /// `email`, and establishes a session for it.
    ///
    /// Checks run in order - all fields present, passwords match,
    /// password long enough, no record already stored for the email -
    /// and nothing is written until every check has passed.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<String> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
            return Err(AuthError::missing_fields());
        }

        if password != confirm {
            return Err(AuthError::password_mismatch());
        }

        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::password_too_short(MIN_PASSWORD_LENGTH));
        }

        if self.store.contains_key(&user_key(email)) {
            return Err(AuthError::account_exists(email));
        }

        let (first_name, last_name) = split_display_name(name);
        let record = ProfileRepository::<S>::create_default(&first_name, &last_name, email);

        ProfileRepository::new(&mut *self.store)
            .save(email, &record)
            .map_err(AuthError::storage)?;

        self.store
            .set(CURRENT_USER_KEY, email)
            .map_err(AuthError::session)?;

        info!("Registration successful for {email}");
        Ok(email.to_string())
    }
}
