use serde::{Deserialize, Serialize};

/// Inline-encoded image assets attached to a profile.
///
/// Each slot is either absent or a self-contained `data:` URI; records
/// never reference external files. Unset slots are omitted from the wire
/// format entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileAssets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_banner_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_banner_src: Option<String>,
}

impl ProfileAssets {
    pub fn is_empty(&self) -> bool {
        self.profile_photo_src.is_none()
            && self.profile_banner_src.is_none()
            && self.company_logo_src.is_none()
            && self.company_banner_src.is_none()
    }
}
