//! ProfileRecord - the persisted profile entity, one per identity.

use crate::{CompanyProfile, Education, PersonalInfo, ProfileAssets, SocialLinks};

use serde::{Deserialize, Serialize};

/// Tagline given to every freshly registered account.
pub const DEFAULT_TAGLINE: &str = "Welcome to ThriveX!";

/// The full editable profile for one identity.
///
/// The identity (email-shaped string) is the storage key discriminator
/// and is deliberately not a field of the record itself.
///
/// Wire format notes: `personal` and `assets` are flattened so their
/// members sit at the top level of the JSON object, while `education`,
/// `company` and `socialMedia` are nested objects. This is the layout
/// records have always been stored in; changing it would orphan existing
/// data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(flatten)]
    pub personal: PersonalInfo,
    pub education: Education,
    pub company: CompanyProfile,
    pub social_media: SocialLinks,
    pub skills: Vec<String>,
    #[serde(flatten)]
    pub assets: ProfileAssets,
}

impl ProfileRecord {
    /// The skeleton record created at registration: the supplied names
    /// and email, the welcome tagline, everything else empty.
    pub fn registration(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            personal: PersonalInfo {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                tagline: DEFAULT_TAGLINE.to_string(),
                email: email.to_string(),
                ..PersonalInfo::default()
            },
            ..Self::default()
        }
    }

    /// Restores the no-duplicate-skills invariant, keeping the first
    /// occurrence of each entry. Data written by this crate never needs
    /// it, but records can arrive from older or foreign writers.
    pub fn normalize(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.skills.len());
        self.skills.retain(|skill| {
            if seen.iter().any(|s| s == skill) {
                false
            } else {
                seen.push(skill.clone());
                true
            }
        });
    }

    /// Exact-match membership test used by the skill editor.
    pub fn has_skill(&self, candidate: &str) -> bool {
        self.skills.iter().any(|s| s == candidate)
    }

    /// True when nothing has ever been set on this record.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Splits a free-form "full name" into (first, last) the way the
/// registration form does: first whitespace token, remainder rejoined.
pub fn split_display_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    (first, last)
}
