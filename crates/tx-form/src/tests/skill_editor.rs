use crate::{SkillEditor, SkillOutcome};

use tx_core::ProfileRecord;

#[test]
fn given_candidate_with_whitespace_when_add_then_trimmed_entry_stored() {
    let mut editor = SkillEditor::new();

    assert_eq!(editor.add("  Rust  "), SkillOutcome::Added);

    assert_eq!(editor.skills(), ["Rust"]);
}

#[test]
fn given_blank_candidate_when_add_then_ignored() {
    let mut editor = SkillEditor::new();

    assert_eq!(editor.add(""), SkillOutcome::Ignored);
    assert_eq!(editor.add("   "), SkillOutcome::Ignored);

    assert!(editor.is_empty());
}

#[test]
fn given_duplicate_candidate_when_add_then_rejected_and_single_entry_remains() {
    let mut editor = SkillEditor::new();
    editor.add("Rust");

    assert_eq!(editor.add("Rust"), SkillOutcome::Duplicate);
    assert_eq!(editor.add("  Rust "), SkillOutcome::Duplicate);

    assert_eq!(editor.len(), 1);
}

#[test]
fn given_stored_skills_when_add_go_then_rust_then_order_preserved_and_duplicate_rejected() {
    let record = ProfileRecord {
        skills: vec!["Rust".into()],
        ..ProfileRecord::default()
    };

    let mut editor = SkillEditor::from_record(&record);
    assert_eq!(editor.add("Go"), SkillOutcome::Added);
    assert_eq!(editor.add("Rust"), SkillOutcome::Duplicate);

    assert_eq!(editor.skills(), ["Rust", "Go"]);
}

#[test]
fn given_three_entries_when_remove_middle_then_indices_reassigned() {
    let mut editor = SkillEditor::new();
    editor.add("Rust");
    editor.add("Go");
    editor.add("Zig");

    assert_eq!(editor.remove_at(1), SkillOutcome::Removed);

    let tags = editor.tags();
    assert_eq!(tags.len(), 2);
    assert_eq!((tags[0].index, tags[0].label.as_str()), (0, "Rust"));
    assert_eq!((tags[1].index, tags[1].label.as_str()), (1, "Zig"));
}

#[test]
fn given_out_of_range_index_when_remove_then_ignored() {
    let mut editor = SkillEditor::new();
    editor.add("Rust");

    assert_eq!(editor.remove_at(5), SkillOutcome::Ignored);
    assert_eq!(editor.len(), 1);
}

#[test]
fn given_mutation_when_synced_then_working_record_sees_current_list() {
    let mut record = ProfileRecord {
        skills: vec!["Rust".into()],
        ..ProfileRecord::default()
    };

    let mut editor = SkillEditor::from_record(&record);
    editor.add("Go");
    editor.sync_into(&mut record);
    assert_eq!(record.skills, vec!["Rust", "Go"]);

    editor.remove_at(0);
    editor.sync_into(&mut record);
    assert_eq!(record.skills, vec!["Go"]);
}

#[test]
fn given_empty_editor_when_rendered_then_no_tags() {
    let editor = SkillEditor::new();
    assert!(editor.tags().is_empty());
}
