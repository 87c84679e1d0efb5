use crate::pages::dashboard::{DashboardView, LogoDisplay};
use crate::pages::page_context::PageContext;

use tx_core::ProfileRecord;

fn context_with(record: ProfileRecord) -> PageContext {
    PageContext {
        identity: "ada@x.com".into(),
        record,
        recovered: false,
    }
}

#[test]
fn given_empty_record_when_viewed_then_display_falls_back_to_local_part() {
    let view = DashboardView::from_context(&context_with(ProfileRecord::default()));

    assert_eq!(view.welcome, "Welcome Back, ada!");
    assert_eq!(view.display_name, "ADA");
    assert_eq!(view.tagline, "Your Tagline Here");
    assert_eq!(view.company_name, "Your Company");
    assert_eq!(view.company_logo, LogoDisplay::Placeholder);
    assert!(view.profile_photo_src.is_none());
    assert!(view.profile_banner_src.is_none());
}

#[test]
fn given_full_record_when_viewed_then_values_pass_through() {
    let mut record = ProfileRecord::registration("Ada", "Lovelace", "ada@x.com");
    record.company.name = "Analytical Engines".into();
    record.assets.profile_photo_src = Some("data:image/png;base64,AAAA".into());

    let view = DashboardView::from_context(&context_with(record));

    assert_eq!(view.welcome, "Welcome Back, Ada!");
    assert_eq!(view.display_name, "ADA LOVELACE");
    assert_eq!(view.tagline, "Welcome to ThriveX!");
    assert_eq!(view.company_name, "Analytical Engines");
    assert_eq!(view.company_logo, LogoDisplay::Initial('A'));
    assert!(view.profile_photo_src.is_some());
}

#[test]
fn given_logo_uploaded_when_viewed_then_image_wins_over_initial() {
    let mut record = ProfileRecord::default();
    record.company.name = "Analytical Engines".into();
    record.assets.company_logo_src = Some("data:image/gif;base64,R0lG".into());

    let view = DashboardView::from_context(&context_with(record));

    assert_eq!(
        view.company_logo,
        LogoDisplay::Image("data:image/gif;base64,R0lG".into())
    );
}

#[test]
fn given_only_last_name_when_viewed_then_name_still_shown() {
    let mut record = ProfileRecord::default();
    record.personal.last_name = "Lovelace".into();

    let view = DashboardView::from_context(&context_with(record));

    assert_eq!(view.display_name, "LOVELACE");
    // First name fallback still uses the identity's local part.
    assert_eq!(view.welcome, "Welcome Back, ada!");
}
