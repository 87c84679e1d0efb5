//! Stored-JSON compatibility tests.
//!
//! Records written by earlier releases keep their original member names
//! (`firstName`, `socialMedia`, `profilePhotoSrc`, ...) with personal and
//! asset fields flattened to the top level. These tests pin that layout.

use crate::ProfileRecord;

#[test]
fn test_serialize_uses_original_member_names() {
    let mut record = ProfileRecord::registration("Ada", "Lovelace", "ada@x.com");
    record.company.founded_year = "2024".into();
    record.social_media.linkedin = "in/ada".into();
    record.assets.profile_photo_src = Some("data:image/png;base64,AAAA".into());

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["lastName"], "Lovelace");
    assert_eq!(json["tagline"], "Welcome to ThriveX!");
    assert_eq!(json["company"]["foundedYear"], "2024");
    assert_eq!(json["socialMedia"]["linkedin"], "in/ada");
    assert_eq!(json["profilePhotoSrc"], "data:image/png;base64,AAAA");
}

#[test]
fn test_unset_asset_slots_are_omitted() {
    let record = ProfileRecord::default();

    let json = serde_json::to_value(&record).unwrap();

    assert!(json.get("profilePhotoSrc").is_none());
    assert!(json.get("profileBannerSrc").is_none());
    assert!(json.get("companyLogoSrc").is_none());
    assert!(json.get("companyBannerSrc").is_none());
}

#[test]
fn test_deserialize_partial_object_defaults_the_rest() {
    let json = r#"{"firstName":"Ada","education":{"class12":"Somerville"}}"#;

    let record: ProfileRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.personal.first_name, "Ada");
    assert_eq!(record.education.class12, "Somerville");
    assert_eq!(record.education.grade12, "");
    assert_eq!(record.personal.last_name, "");
    assert!(record.skills.is_empty());
    assert!(record.company == Default::default());
    assert!(record.assets.is_empty());
}

#[test]
fn test_round_trip_preserves_every_field() {
    let mut record = ProfileRecord::registration("Ada", "Lovelace", "ada@x.com");
    record.personal.phone = "555-0100".into();
    record.personal.home_address = "12 St James Square".into();
    record.personal.state = "London".into();
    record.education.class10 = "Kirkby Mallory".into();
    record.education.grade10 = "A".into();
    record.company.name = "Analytical Engines".into();
    record.company.industry = "Computing".into();
    record.company.team_size = "2-10".into();
    record.company.funding_stage = "Seed".into();
    record.social_media.instagram = "@ada".into();
    record.skills = vec!["Mathematics".into(), "Programming".into()];
    record.assets.company_logo_src = Some("data:image/gif;base64,R0lG".into());

    let json = serde_json::to_string(&record).unwrap();
    let restored: ProfileRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(record, restored);
}
