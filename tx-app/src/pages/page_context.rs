//! Per-page context: identity plus working record, resolved once at
//! page open and passed explicitly to whatever renders the page.

use tx_auth::{Access, PageKind, SessionManager};
use tx_core::ProfileRecord;
use tx_profile::ProfileRepository;
use tx_store::KeyValueStore;

/// What opening a page produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenPage {
    /// Session resolved and record loaded; render with this context.
    Context(PageContext),
    /// Gated page without a session: render nothing, go here instead.
    Redirect(PageKind),
    /// Ungated page without a session.
    Anonymous,
}

/// The state a page-level controller works against. Constructed once
/// per page open; nothing here is ambient or global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub identity: String,
    /// The working record; in-memory edits land here until submission.
    pub record: ProfileRecord,
    /// True when the stored record was unreadable and masked with the
    /// default.
    pub recovered: bool,
}

impl PageContext {
    /// Resolves the session gate for `kind` and loads the record for
    /// the active identity.
    pub fn open<S: KeyValueStore>(store: &mut S, kind: PageKind) -> OpenPage {
        let access = SessionManager::new(&mut *store).require_session(kind);

        match access {
            Access::RedirectToLogin => OpenPage::Redirect(PageKind::Landing),
            Access::Anonymous => OpenPage::Anonymous,
            Access::Granted(identity) => {
                let loaded = ProfileRepository::new(store).load(&identity);
                let recovered = loaded.was_recovered();
                OpenPage::Context(PageContext {
                    identity,
                    record: loaded.record,
                    recovered,
                })
            }
        }
    }
}
