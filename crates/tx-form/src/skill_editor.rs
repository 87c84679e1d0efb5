//! Ordered-set editor for the skills list.

use tx_core::ProfileRecord;

use log::debug;

/// What an editor operation did, for the UI to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillOutcome {
    Added,
    /// Exact-match duplicate; list unchanged, user gets a notice.
    Duplicate,
    /// Blank input or out-of-range index; silently ignored.
    Ignored,
    Removed,
}

/// One rendered tag. Tags are regenerated wholesale after every
/// mutation; an index is only valid for the render it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTag {
    pub index: usize,
    pub label: String,
}

/// In-memory working list of unique skills, insertion-ordered.
///
/// Callers must sync the sequence back into the working record after
/// every mutation (`sync_into`), so a submission sees the up-to-date
/// list without any separate "save skills" step.
#[derive(Debug, Clone, Default)]
pub struct SkillEditor {
    skills: Vec<String>,
}

impl SkillEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the working list from the loaded record.
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            skills: record.skills.clone(),
        }
    }

    /// Trims and appends `candidate`. Empty input is ignored; an exact
    /// duplicate is rejected without mutating the list.
    pub fn add(&mut self, candidate: &str) -> SkillOutcome {
        let skill = candidate.trim();

        if skill.is_empty() {
            return SkillOutcome::Ignored;
        }

        if self.skills.iter().any(|s| s == skill) {
            debug!("Skill already added: {skill}");
            return SkillOutcome::Duplicate;
        }

        self.skills.push(skill.to_string());
        SkillOutcome::Added
    }

    /// Removes the entry at `index`; later entries shift down.
    pub fn remove_at(&mut self, index: usize) -> SkillOutcome {
        if index >= self.skills.len() {
            return SkillOutcome::Ignored;
        }

        self.skills.remove(index);
        SkillOutcome::Removed
    }

    /// The visible tag list, rebuilt from scratch with fresh positional
    /// indices. Never patch a previous render - a removal shifts every
    /// later index.
    pub fn tags(&self) -> Vec<SkillTag> {
        self.skills
            .iter()
            .enumerate()
            .map(|(index, label)| SkillTag {
                index,
                label: label.clone(),
            })
            .collect()
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Replaces the working record's skills with the editor's sequence.
    pub fn sync_into(&self, record: &mut ProfileRecord) {
        record.skills = self.skills.clone();
    }
}
