//! Core data model for student records.
//!
//! A student is a schemaless document: an ordered map of caller-supplied
//! fields plus one store-assigned identifier kept under the reserved `_id`
//! key. The service layer constrains nothing about the remaining fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key under which the store-assigned identifier lives.
pub const ID_FIELD: &str = "_id";

/// Caller-supplied fields of a student document.
///
/// Ordered string-to-value mapping over arbitrary JSON values.
pub type StudentFields = Map<String, Value>;

/// Store-assigned student identifier in its string form.
///
/// Each repository backend parses this into its native identifier type
/// (`ObjectId` for MongoDB, `Uuid` for the local store); an unparseable
/// identifier surfaces as an invalid-identifier error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(value: impl Into<String>) -> Self {
        StudentId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored student record: the caller-supplied fields plus the identifier.
///
/// Serializes transparently as a plain JSON object with `_id` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentRecord(StudentFields);

impl StudentRecord {
    /// Assemble a record from a store-assigned identifier and its fields.
    pub fn from_parts(id: &StudentId, fields: StudentFields) -> Self {
        let mut map = StudentFields::with_capacity(fields.len() + 1);
        map.insert(ID_FIELD.to_string(), Value::String(id.as_str().to_owned()));
        for (key, value) in fields {
            // The store-assigned identifier wins over any stale `_id` entry.
            if key != ID_FIELD {
                map.insert(key, value);
            }
        }
        StudentRecord(map)
    }

    /// The record identifier in its string form, if present.
    pub fn id(&self) -> Option<StudentId> {
        match self.0.get(ID_FIELD) {
            Some(Value::String(s)) => Some(StudentId::new(s.clone())),
            _ => None,
        }
    }

    /// The underlying field map, identifier included.
    pub fn fields(&self) -> &StudentFields {
        &self.0
    }
}

impl From<StudentFields> for StudentRecord {
    fn from(fields: StudentFields) -> Self {
        StudentRecord(fields)
    }
}
