//! Read-only dashboard projection with the display fallbacks the
//! sidebar has always used.

use crate::PageContext;

/// What the company logo spot shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoDisplay {
    /// An uploaded logo, as a data URI.
    Image(String),
    /// No logo; the company name's first letter.
    Initial(char),
    /// Neither logo nor company name.
    Placeholder,
}

/// View model for the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub welcome: String,
    /// Sidebar name, uppercased; falls back to the identity's local
    /// part when no name was ever entered.
    pub display_name: String,
    pub tagline: String,
    pub company_name: String,
    pub company_logo: LogoDisplay,
    pub profile_photo_src: Option<String>,
    pub profile_banner_src: Option<String>,
}

const DEFAULT_DISPLAY_TAGLINE: &str = "Your Tagline Here";
const DEFAULT_COMPANY_NAME: &str = "Your Company";

impl DashboardView {
    pub fn from_context(ctx: &PageContext) -> Self {
        let local_part = ctx.identity.split('@').next().unwrap_or_default();

        let name = ctx.record.personal.display_name();
        let display_name = if name.is_empty() {
            local_part.to_uppercase()
        } else {
            name.to_uppercase()
        };

        let first_name = if ctx.record.personal.first_name.is_empty() {
            local_part
        } else {
            ctx.record.personal.first_name.as_str()
        };

        let tagline = if ctx.record.personal.tagline.is_empty() {
            DEFAULT_DISPLAY_TAGLINE.to_string()
        } else {
            ctx.record.personal.tagline.clone()
        };

        let company_name = if ctx.record.company.name.is_empty() {
            DEFAULT_COMPANY_NAME.to_string()
        } else {
            ctx.record.company.name.clone()
        };

        let company_logo = match (
            &ctx.record.assets.company_logo_src,
            ctx.record.company.initial(),
        ) {
            (Some(src), _) => LogoDisplay::Image(src.clone()),
            (None, Some(initial)) => LogoDisplay::Initial(initial),
            (None, None) => LogoDisplay::Placeholder,
        };

        Self {
            welcome: format!("Welcome Back, {first_name}!"),
            display_name,
            tagline,
            company_name,
            company_logo,
            profile_photo_src: ctx.record.assets.profile_photo_src.clone(),
            profile_banner_src: ctx.record.assets.profile_banner_src.clone(),
        }
    }
}
