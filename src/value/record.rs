use super::Value;
use std::collections::BTreeMap;

/// An object-like value: a set of visible fields plus an optional
/// textual representation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Publicly visible fields
    fields: BTreeMap<String, Value>,
    /// Text the record renders as, if it has one
    display: Option<String>,
}

impl Record {
    /// Create an empty record with no textual representation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from an existing field map
    pub fn from_fields(fields: BTreeMap<String, Value>) -> Self {
        Self {
            fields,
            display: None,
        }
    }

    /// Add (or replace) a visible field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Give the record a textual representation
    pub fn with_display(mut self, text: impl Into<String>) -> Self {
        self.display = Some(text.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Number of visible fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn into_fields(self) -> BTreeMap<String, Value> {
        self.fields
    }
}
