pub mod binder;
pub mod error;
pub mod field_map;
pub mod field_path;
pub mod form_document;
pub mod image;
pub mod skill_editor;

#[cfg(test)]
mod tests;

pub use binder::{collect, project};
pub use error::{ImageError, Result};
pub use field_map::{FIELD_BINDINGS, FieldBinding, binding_for};
pub use field_path::{CompanyField, EducationField, FieldPath, PersonalField, SocialField};
pub use form_document::{FormDocument, MemoryForm};
pub use image::{AssetSlot, attach_image, encode_data_uri, parse_data_uri, sniff_mime};
pub use skill_editor::{SkillEditor, SkillOutcome, SkillTag};
