use crate::Notification;

use tx_auth::{CredentialVerifier, PageKind, SessionManager};
use tx_store::KeyValueStore;

/// The login form's two fields.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { identity: String, next: PageKind },
    Failure(Notification),
}

/// Handles a login submission. On failure the password field is
/// cleared; the email field keeps its value.
pub fn submit_login<S: KeyValueStore>(
    store: &mut S,
    verifier: &dyn CredentialVerifier,
    form: &mut LoginForm,
) -> LoginOutcome {
    match SessionManager::new(store).login(verifier, &form.email, &form.password) {
        Ok(identity) => LoginOutcome::Success {
            identity,
            next: PageKind::Dashboard,
        },
        Err(e) => {
            form.password.clear();
            LoginOutcome::Failure(Notification::warning(e.user_message()))
        }
    }
}
