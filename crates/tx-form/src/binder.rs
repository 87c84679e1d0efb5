//! Generic projection and collection over the declarative field map.

use crate::{FIELD_BINDINGS, FormDocument};

use tx_core::ProfileRecord;

/// Projects `record` onto the form: every declared field present on the
/// page receives the record's value for its path. Fields the page lacks
/// are skipped; values never set project as empty strings.
pub fn project(record: &ProfileRecord, doc: &mut dyn FormDocument) {
    for binding in FIELD_BINDINGS {
        doc.set_value(binding.field, binding.path.get(record));
    }
}

/// Collects the form back into `record`: every declared field is read
/// defensively - a field the page lacks reads as the empty string - and
/// written to its path.
///
/// Skills and image assets are deliberately not collected here: the
/// skill editor syncs its sequence into the working record on every
/// mutation, and image attachment writes the encoded asset eagerly at
/// decode time. By the time a submission collects the text fields, both
/// are already up to date in `record`.
pub fn collect(doc: &dyn FormDocument, record: &mut ProfileRecord) {
    for binding in FIELD_BINDINGS {
        let value = doc.value(binding.field).unwrap_or_default();
        binding.path.set(record, value);
    }
}
