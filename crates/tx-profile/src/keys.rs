//! Storage key layout.
//!
//! The key space is shared with the session gate: `currentUser` names
//! the active identity, `user_{identity}` holds that identity's record.
//! These literals are load-bearing - existing stores were written with
//! them.

/// Key holding the active identity, absent when logged out.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Key holding the serialized record for `identity`.
pub fn user_key(identity: &str) -> String {
    format!("user_{identity}")
}
