//! Pluggable credential verification.
//!
//! This is a demo stand-in, not a security boundary: the verifier seam
//! exists so a real backend can slot in, while the shipped
//! implementation checks a fixed allow-list.

/// One accepted email/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub email: String,
    pub password: String,
}

impl CredentialPair {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Capability the session gate defers credential checks to.
pub trait CredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Fixed allow-list verifier.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    pairs: Vec<CredentialPair>,
}

impl StaticCredentials {
    pub fn new(pairs: Vec<CredentialPair>) -> Self {
        Self { pairs }
    }

    /// The demo accounts shipped with the app.
    pub fn demo() -> Self {
        Self::new(vec![
            CredentialPair::new("demo@thrivex.com", "demo123"),
            CredentialPair::new("investor@example.com", "invest123"),
            CredentialPair::new("user@test.com", "test123"),
        ])
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> bool {
        self.pairs
            .iter()
            .any(|pair| pair.email == email && pair.password == password)
    }
}
