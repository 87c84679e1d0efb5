use crate::{DEFAULT_TAGLINE, ProfileRecord, split_display_name};

#[test]
fn test_registration_skeleton() {
    let record = ProfileRecord::registration("Ada", "Lovelace", "ada@x.com");

    assert_eq!(record.personal.first_name, "Ada");
    assert_eq!(record.personal.last_name, "Lovelace");
    assert_eq!(record.personal.email, "ada@x.com");
    assert_eq!(record.personal.tagline, DEFAULT_TAGLINE);
    assert!(record.skills.is_empty());
    assert!(record.education == Default::default());
    assert!(record.company == Default::default());
    assert!(record.social_media == Default::default());
    assert!(record.assets.is_empty());
}

#[test]
fn test_default_record_is_empty() {
    let record = ProfileRecord::default();
    assert!(record.is_empty());

    let mut edited = ProfileRecord::default();
    edited.personal.phone = "555-0100".into();
    assert!(!edited.is_empty());
}

#[test]
fn test_normalize_removes_duplicate_skills_keeping_first() {
    let mut record = ProfileRecord {
        skills: vec![
            "Rust".into(),
            "Go".into(),
            "Rust".into(),
            "rust".into(),
            "Go".into(),
        ],
        ..ProfileRecord::default()
    };

    record.normalize();

    // Case-sensitive exact match: "rust" is a distinct entry.
    assert_eq!(record.skills, vec!["Rust", "Go", "rust"]);
}

#[test]
fn test_normalize_on_clean_record_is_a_no_op() {
    let mut record = ProfileRecord {
        skills: vec!["Rust".into(), "Go".into()],
        ..ProfileRecord::default()
    };

    record.normalize();

    assert_eq!(record.skills, vec!["Rust", "Go"]);
}

#[test]
fn test_has_skill_is_exact_match() {
    let record = ProfileRecord {
        skills: vec!["Rust".into()],
        ..ProfileRecord::default()
    };

    assert!(record.has_skill("Rust"));
    assert!(!record.has_skill("rust"));
    assert!(!record.has_skill("Rust "));
}

#[test]
fn test_display_name_trims_missing_sides() {
    let mut record = ProfileRecord::default();
    assert_eq!(record.personal.display_name(), "");

    record.personal.first_name = "Ada".into();
    assert_eq!(record.personal.display_name(), "Ada");

    record.personal.last_name = "Lovelace".into();
    assert_eq!(record.personal.display_name(), "Ada Lovelace");
}

#[test]
fn test_split_display_name() {
    assert_eq!(split_display_name("Ada Lovelace"), ("Ada".into(), "Lovelace".into()));
    assert_eq!(
        split_display_name("Ada King Lovelace"),
        ("Ada".into(), "King Lovelace".into())
    );
    assert_eq!(split_display_name("Ada"), ("Ada".into(), String::new()));
    assert_eq!(split_display_name("   "), (String::new(), String::new()));
}

#[test]
fn test_company_initial_fallback() {
    let mut record = ProfileRecord::default();
    assert_eq!(record.company.initial(), None);

    record.company.name = "thrivex".into();
    assert_eq!(record.company.initial(), Some('T'));
}
