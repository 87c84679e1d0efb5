use serde::{Deserialize, Serialize};

/// Social media handles linked from the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinks {
    pub instagram: String,
    pub linkedin: String,
}
