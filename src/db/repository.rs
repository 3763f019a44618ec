//! Storage abstraction for the students collection.
//!
//! Every backend implements [`StudentRepository`]; HTTP handlers only ever
//! see the trait object, so backends can be swapped without touching the
//! routing layer.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::model::{StudentFields, StudentId, StudentRecord};

/// Async interface over the students collection.
///
/// Identifiers are assigned by the store on insert; callers never supply
/// them. Updates merge the given fields into the stored record, leaving
/// unmentioned fields untouched. An empty field map is a valid no-op merge:
/// the operation still reports whether the target exists.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Return every student record in insertion order.
    async fn list_students(&self) -> RepositoryResult<Vec<StudentRecord>>;

    /// Look up a single student. `Ok(None)` means the id parsed but no
    /// record carries it; an unparseable id is an `InvalidId` error.
    async fn find_student(&self, id: &StudentId) -> RepositoryResult<Option<StudentRecord>>;

    /// Insert one student and return its store-assigned identifier.
    async fn insert_student(&self, fields: StudentFields) -> RepositoryResult<StudentId>;

    /// Insert a batch of students and return their identifiers in
    /// batch order.
    async fn insert_students(
        &self,
        batch: Vec<StudentFields>,
    ) -> RepositoryResult<Vec<StudentId>>;

    /// Merge `fields` into the student with the given id. Returns whether
    /// a record matched, regardless of whether any value changed.
    async fn update_student(
        &self,
        id: &StudentId,
        fields: StudentFields,
    ) -> RepositoryResult<bool>;

    /// Delete the student with the given id. Returns whether a record
    /// was removed.
    async fn delete_student(&self, id: &StudentId) -> RepositoryResult<bool>;

    /// Merge `fields` into every student record and return how many
    /// records matched. Not atomic across records.
    async fn update_all_students(&self, fields: StudentFields) -> RepositoryResult<u64>;

    /// Probe the backing store. `Ok(true)` means reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
