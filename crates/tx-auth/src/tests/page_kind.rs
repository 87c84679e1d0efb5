use crate::PageKind;

#[test]
fn test_from_path_detects_known_pages() {
    assert_eq!(PageKind::from_path("dashboard.html"), PageKind::Dashboard);
    assert_eq!(
        PageKind::from_path("/app/update-profile.html"),
        PageKind::UpdateProfile
    );
    assert_eq!(PageKind::from_path("register.html"), PageKind::Register);
    assert_eq!(PageKind::from_path("signup"), PageKind::Register);
    assert_eq!(PageKind::from_path("login.html"), PageKind::Login);
    assert_eq!(PageKind::from_path("index.html"), PageKind::Landing);
}

#[test]
fn test_from_path_unknown_falls_back_to_landing() {
    assert_eq!(PageKind::from_path(""), PageKind::Landing);
    assert_eq!(PageKind::from_path("/some/where/else.html"), PageKind::Landing);
}

#[test]
fn test_session_requirement_per_page() {
    assert!(PageKind::Dashboard.requires_session());
    assert!(PageKind::UpdateProfile.requires_session());
    assert!(!PageKind::Landing.requires_session());
    assert!(!PageKind::Login.requires_session());
    assert!(!PageKind::Register.requires_session());
}

#[test]
fn test_path_round_trip() {
    for kind in [
        PageKind::Landing,
        PageKind::Login,
        PageKind::Register,
        PageKind::Dashboard,
        PageKind::UpdateProfile,
    ] {
        assert_eq!(PageKind::from_path(kind.path()), kind);
    }
}
