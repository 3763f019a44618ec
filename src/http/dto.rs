//! Data Transfer Objects for the HTTP API.
//!
//! Student documents are schemaless, so request bodies arrive as raw JSON
//! values and are shaped into field maps here. Shaping also drops any
//! caller-supplied `_id`: identifiers are assigned by the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{StudentFields, ID_FIELD};

/// Mutation response body, `{"success": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Human-readable confirmation message
    pub success: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Document store connection status
    pub database: String,
}

/// Shape a create request body into a batch of student field maps.
///
/// Accepts a non-empty JSON array whose elements are all objects; anything
/// else is invalid input.
pub fn student_batch(body: Value) -> Option<Vec<StudentFields>> {
    let Value::Array(students) = body else {
        return None;
    };
    if students.is_empty() {
        return None;
    }

    let mut batch = Vec::with_capacity(students.len());
    for student in students {
        let Value::Object(mut fields) = student else {
            return None;
        };
        fields.remove(ID_FIELD);
        batch.push(fields);
    }
    Some(batch)
}

/// Shape an update request body into a partial student field map.
///
/// Accepts a JSON object with at least one field left after the `_id`
/// entry is dropped.
pub fn partial_student(body: Value) -> Option<StudentFields> {
    let Value::Object(mut fields) = body else {
        return None;
    };
    fields.remove(ID_FIELD);
    if fields.is_empty() {
        return None;
    }
    Some(fields)
}
