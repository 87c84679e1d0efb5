//! Update-profile page controller: editable form, skill editor, image
//! attachments, and the explicit submission that persists them.

use crate::{Notification, PageContext};

use tx_auth::PageKind;
use tx_core::ProfileRecord;
use tx_form::{
    AssetSlot, FIELD_BINDINGS, FormDocument, MemoryForm, Result as ImageResult, SkillEditor,
    SkillOutcome, SkillTag, attach_image, binding_for, collect, project,
};
use tx_profile::ProfileRepository;
use tx_store::KeyValueStore;

use log::warn;

pub struct UpdateProfilePage {
    identity: String,
    form: MemoryForm,
    skills: SkillEditor,
    /// Working record: image attachments and skill syncs land here
    /// ahead of submission; text fields are collected at submission.
    record: ProfileRecord,
}

impl UpdateProfilePage {
    /// Builds the editable page from an opened context: declares every
    /// bound field, projects the record onto it, and seeds the skill
    /// editor.
    pub fn open(ctx: PageContext) -> Self {
        let mut record = ctx.record;

        // The email field prefills with the identity when the record
        // has none yet.
        if record.personal.email.is_empty() {
            record.personal.email = ctx.identity.clone();
        }

        let mut form = MemoryForm::with_fields(FIELD_BINDINGS.iter().map(|b| b.field));
        project(&record, &mut form);

        let skills = SkillEditor::from_record(&record);

        Self {
            identity: ctx.identity,
            form,
            skills,
            record,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn form(&self) -> &MemoryForm {
        &self.form
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// Sets a declared text field. Unknown fields are rejected rather
    /// than silently invented.
    pub fn edit_field(&mut self, field: &str, value: &str) -> bool {
        if binding_for(field).is_none() {
            return false;
        }
        self.form.set_value(field, value);
        true
    }

    /// Adds a skill and reflects the editor's sequence into the working
    /// record. A duplicate yields a user-visible notice.
    pub fn add_skill(&mut self, candidate: &str) -> (SkillOutcome, Option<Notification>) {
        let outcome = self.skills.add(candidate);
        self.skills.sync_into(&mut self.record);

        let notice = match outcome {
            SkillOutcome::Duplicate => Some(Notification::warning("Skill already added.")),
            _ => None,
        };
        (outcome, notice)
    }

    /// Removes the skill at `index` and reflects the sequence into the
    /// working record.
    pub fn remove_skill(&mut self, index: usize) -> SkillOutcome {
        let outcome = self.skills.remove_at(index);
        self.skills.sync_into(&mut self.record);
        outcome
    }

    /// The current tag render.
    pub fn skill_tags(&self) -> Vec<SkillTag> {
        self.skills.tags()
    }

    /// Encodes a selected image into the working record immediately.
    /// Whether the page is ever submitted afterwards does not affect
    /// the slot's new value being visible to `submit`.
    pub fn attach(&mut self, slot: AssetSlot, name: Option<&str>, bytes: &[u8]) -> ImageResult<String> {
        attach_image(slot, name, bytes, &mut self.record)
    }

    /// Explicit submission: collects the text fields into the working
    /// record and stores it wholesale.
    ///
    /// On success the page redirects to the dashboard. On failure the
    /// working record is left intact so the user can retry.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut S,
    ) -> (Notification, Option<PageKind>) {
        collect(&self.form, &mut self.record);
        self.skills.sync_into(&mut self.record);

        match ProfileRepository::new(store).save(&self.identity, &self.record) {
            Ok(()) => (
                Notification::success("Profile updated successfully!"),
                Some(PageKind::Dashboard),
            ),
            Err(e) => {
                warn!("Save failed for {}: {e}", self.identity);
                (
                    Notification::warning(format!(
                        "Could not save profile changes. {}",
                        e.recovery_hint()
                    )),
                    None,
                )
            }
        }
    }
}
