/// The pages the app routes between, detected from a path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The unauthenticated entry page (landing + login form).
    Landing,
    Login,
    Register,
    Dashboard,
    UpdateProfile,
}

impl PageKind {
    /// Detects the page kind from a location path such as
    /// `/app/update-profile.html`. Unknown paths fall back to the entry
    /// page.
    pub fn from_path(path: &str) -> Self {
        let name = path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim_end_matches(".html");

        match name {
            "dashboard" => Self::Dashboard,
            "update-profile" => Self::UpdateProfile,
            "register" | "signup" => Self::Register,
            "login" => Self::Login,
            _ => Self::Landing,
        }
    }

    /// Whether the page may only be rendered with an active session.
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Dashboard | Self::UpdateProfile)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "index.html",
            Self::Login => "login.html",
            Self::Register => "register.html",
            Self::Dashboard => "dashboard.html",
            Self::UpdateProfile => "update-profile.html",
        }
    }
}

/// Result of gating a page against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// A session is active; the page may render for this identity.
    Granted(String),
    /// No session, but this page does not require one.
    Anonymous,
    /// No session and the page requires one; render nothing and go to
    /// the entry page instead.
    RedirectToLogin,
}

impl Access {
    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::Granted(identity) => Some(identity),
            _ => None,
        }
    }
}
