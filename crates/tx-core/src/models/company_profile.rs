use serde::{Deserialize, Serialize};

/// Company / venture section of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub description: String,
    pub industry: String,
    pub founded_year: String,
    pub team_size: String,
    pub funding_stage: String,
}

impl CompanyProfile {
    /// First character of the company name, uppercased, for the initials
    /// fallback when no logo has been uploaded.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}
