//! The metadata record handed from the generators to the presentation layer.

use std::collections::BTreeMap;

use serde::Serialize;

/// A freshly generated identifier together with its decomposed fields.
///
/// Serializes to a flat JSON object, e.g.
/// `{"id":"41373559241","type":"MaLo","checksum":"1",...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdRecord {
    /// The complete identifier, including the check digit where the family has one.
    pub id: String,

    /// Family tag (`MaLo`, `NeLo`, `MeLo`, `TR`, `SR`).
    #[serde(rename = "type")]
    pub id_type: &'static str,

    /// Family-specific decomposed fields.
    #[serde(flatten)]
    pub fields: BTreeMap<&'static str, String>,
}

impl IdRecord {
    pub(crate) fn new(id: String, id_type: &'static str) -> Self {
        Self {
            id,
            id_type,
            fields: BTreeMap::new(),
        }
    }

    pub(crate) fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.insert(name, value.into());
        self
    }

    /// Returns a decomposed field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
