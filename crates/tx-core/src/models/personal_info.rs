use serde::{Deserialize, Serialize};

/// Personal details shown in the profile sidebar and the edit form.
///
/// Every field is optional; an empty string means "never set". The wire
/// names match the stored JSON produced by earlier releases, so existing
/// records keep loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub home_address: String,
    pub state: String,
}

impl PersonalInfo {
    /// "First Last" with either side optional; empty when neither is set.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
