use std::collections::BTreeMap;

/// A page's set of named input fields.
///
/// Pages carry different subsets of the declared fields, so every
/// operation is defined for absent fields: reading one yields `None`,
/// writing one is a no-op. Nothing here can raise - the binding layer
/// is reused across pages and an absent field is normal, not an error.
pub trait FormDocument {
    /// Current value of `field`, or `None` when the page has no such
    /// field.
    fn value(&self, field: &str) -> Option<String>;

    /// Sets `field` to `value`; silently does nothing when the page has
    /// no such field.
    fn set_value(&mut self, field: &str, value: &str);

    fn has_field(&self, field: &str) -> bool {
        self.value(field).is_some()
    }
}

/// In-memory form backed by a field map.
///
/// Only fields declared at construction exist; writes to anything else
/// fall through, mirroring a page that simply lacks the element.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    fields: BTreeMap<String, String>,
}

impl MemoryForm {
    /// Form with no fields at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form carrying the given fields, each initially empty.
    pub fn with_fields<I, T>(fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|f| (f.into(), String::new()))
                .collect(),
        }
    }

    /// Adds a field (idempotent), keeping any value it already holds.
    pub fn declare_field(&mut self, field: impl Into<String>) {
        self.fields.entry(field.into()).or_default();
    }

    /// Overwrites a field's value, declaring it if necessary. Test and
    /// controller convenience; `set_value` is the page-faithful path.
    pub fn force_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FormDocument for MemoryForm {
    fn value(&self, field: &str) -> Option<String> {
        self.fields.get(field).cloned()
    }

    fn set_value(&mut self, field: &str, value: &str) {
        if let Some(slot) = self.fields.get_mut(field) {
            *slot = value.to_string();
        }
    }
}
