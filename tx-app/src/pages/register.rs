use crate::Notification;

use tx_auth::{PageKind, SessionManager};
use tx_store::KeyValueStore;

/// The registration form's fields.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Success { identity: String, next: PageKind },
    Failure(Notification),
}

/// Handles a registration submission. On failure both password fields
/// are cleared; name and email keep their values.
pub fn submit_registration<S: KeyValueStore>(
    store: &mut S,
    form: &mut RegisterForm,
) -> RegisterOutcome {
    match SessionManager::new(store).register(&form.name, &form.email, &form.password, &form.confirm)
    {
        Ok(identity) => RegisterOutcome::Success {
            identity,
            next: PageKind::Dashboard,
        },
        Err(e) => {
            form.password.clear();
            form.confirm.clear();
            RegisterOutcome::Failure(Notification::warning(e.user_message()))
        }
    }
}
