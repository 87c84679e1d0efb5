pub mod company_profile;
pub mod education;
pub mod personal_info;
pub mod profile_assets;
pub mod profile_record;
pub mod social_links;
