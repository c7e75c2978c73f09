use std::borrow::Cow;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::field::{FieldValue, RegistryField};

/// One registry entry exactly as exported: field name to JSON value.
pub type RawRecord = Map<String, Value>;

/// Output key carrying [`Record::id`].
pub const ID_KEY: &str = "__id";
/// Output key carrying [`Record::normalized_date`].
pub const ISO_DATE_KEY: &str = "__isoDate";

/// A loaded registry entry.
///
/// `id` and `normalized_date` are fixed when the record is built; the
/// original fields are kept in export order, including ones the checker
/// does not know about.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: usize,
    normalized_date: Option<String>,
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new(id: usize, normalized_date: Option<String>, raw: RawRecord) -> Self {
        let fields = raw
            .into_iter()
            .map(|(key, value)| (key, FieldValue::from(value)))
            .collect();
        Self {
            id,
            normalized_date,
            fields,
        }
    }

    /// Zero-based position in the collection the record was loaded from.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Registration date as `YYYY-MM-DD`, when the raw text could be read.
    pub fn normalized_date(&self) -> Option<&str> {
        self.normalized_date.as_deref()
    }

    /// Value stored under an arbitrary key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn field(&self, field: RegistryField) -> Option<&FieldValue> {
        self.get(field.key())
    }

    /// Text form of a known field; `None` when the field is missing or null.
    pub fn field_text(&self, field: RegistryField) -> Option<Cow<'_, str>> {
        self.field(field).and_then(FieldValue::text)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let passthrough = self
            .fields
            .iter()
            .filter(|(name, _)| name != ID_KEY && name != ISO_DATE_KEY);
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(ID_KEY, &self.id)?;
        map.serialize_entry(ISO_DATE_KEY, &self.normalized_date)?;
        for (name, value) in passthrough {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
