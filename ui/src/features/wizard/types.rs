// Data shapes of the backend configuration wizard. Field keys and values
// are opaque here: what a field means is the backend's business.
use serde::{Deserialize, Serialize};

/// Identity of the backend service a wizard run configures.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackendMeta {
    pub service_title: String,
    pub service_type: String,
}

/// Ordered field -> value map a wizard run edits and submits.
///
/// Insertion order is display order, so connection fields stay grouped the
/// way the initial values laid them out.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardFormValues {
    fields: Vec<(String, String)>,
}

impl WizardFormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing an existing value and keeping first-set
    /// order otherwise.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| key == field) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((field.to_string(), value)),
        }
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value.as_str())
    }

    /// Owned snapshot of the fields in display order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Per-field help texts shown underneath the wizard inputs.
///
/// Built by merging the console's base help with optionally injected
/// supplementary content (e.g. from a group-sync extension). The injection
/// is an explicit argument, never a global registry lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpContent {
    entries: Vec<(String, String)>,
}

impl HelpContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, text: &str) -> Self {
        self.insert(field, text);
        self
    }

    pub fn insert(&mut self, field: &str, text: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == field) {
            Some((_, existing)) => *existing = text.to_string(),
            None => self.entries.push((field.to_string(), text.to_string())),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, text)| text.as_str())
    }

    /// Overlay `extension` on top of `self`: colliding keys take the
    /// extension's text, extension-only keys are appended.
    pub fn merged_with(mut self, extension: &HelpContent) -> Self {
        for (field, text) in &extension.entries {
            self.insert(field, text);
        }
        self
    }
}
