pub mod models;

#[cfg(test)]
mod tests;

pub use models::company_profile::CompanyProfile;
pub use models::education::Education;
pub use models::personal_info::PersonalInfo;
pub use models::profile_assets::ProfileAssets;
pub use models::profile_record::{DEFAULT_TAGLINE, ProfileRecord, split_display_name};
pub use models::social_links::SocialLinks;
