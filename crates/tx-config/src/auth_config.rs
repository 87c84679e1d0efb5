use serde::Deserialize;

/// One accepted demo login, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialEntry {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// The demo allow-list. Not a security boundary; see the session
    /// gate's CredentialVerifier seam.
    pub credentials: Vec<CredentialEntry>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials: vec![
                CredentialEntry {
                    email: String::from("demo@thrivex.com"),
                    password: String::from("demo123"),
                },
                CredentialEntry {
                    email: String::from("investor@example.com"),
                    password: String::from("invest123"),
                },
                CredentialEntry {
                    email: String::from("user@test.com"),
                    password: String::from("test123"),
                },
            ],
        }
    }
}
