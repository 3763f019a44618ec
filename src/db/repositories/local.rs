//! In-memory local repository implementation.
//!
//! Stores student documents in an insertion-ordered `Vec` guarded by an
//! `RwLock`, giving fast, deterministic and isolated execution for unit
//! tests and local development. Identifiers are random v4 UUIDs.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::error::{RepositoryError, RepositoryResult};
use crate::db::repository::StudentRepository;
use crate::model::{StudentFields, StudentId, StudentRecord, ID_FIELD};

#[derive(Debug, Clone)]
struct StoredStudent {
    id: Uuid,
    fields: StudentFields,
}

/// In-memory student repository.
///
/// Cloning shares the underlying collection, so a handle kept by a test
/// observes the writes made through the service.
#[derive(Clone)]
pub struct LocalRepository {
    students: Arc<RwLock<Vec<StoredStudent>>>,
}

impl LocalRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            students: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored students.
    pub fn student_count(&self) -> usize {
        self.students.read().len()
    }

    fn native_id(id: &StudentId) -> RepositoryResult<Uuid> {
        Uuid::parse_str(id.as_str()).map_err(|_| RepositoryError::invalid_id(id))
    }

    fn record(stored: &StoredStudent) -> StudentRecord {
        StudentRecord::from_parts(&StudentId::new(stored.id.to_string()), stored.fields.clone())
    }

    fn merge(target: &mut StudentFields, fields: StudentFields) {
        for (key, value) in fields {
            // The identifier is immutable once assigned.
            if key != ID_FIELD {
                target.insert(key, value);
            }
        }
    }

    fn store(&self, mut fields: StudentFields) -> Uuid {
        // Identifiers are assigned here, never taken from the caller.
        fields.remove(ID_FIELD);
        let id = Uuid::new_v4();
        self.students.write().push(StoredStudent { id, fields });
        id
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for LocalRepository {
    async fn list_students(&self) -> RepositoryResult<Vec<StudentRecord>> {
        let students = self.students.read();
        Ok(students.iter().map(Self::record).collect())
    }

    async fn find_student(&self, id: &StudentId) -> RepositoryResult<Option<StudentRecord>> {
        let native = Self::native_id(id)?;
        let students = self.students.read();
        Ok(students.iter().find(|s| s.id == native).map(Self::record))
    }

    async fn insert_student(&self, fields: StudentFields) -> RepositoryResult<StudentId> {
        Ok(StudentId::new(self.store(fields).to_string()))
    }

    async fn insert_students(
        &self,
        batch: Vec<StudentFields>,
    ) -> RepositoryResult<Vec<StudentId>> {
        Ok(batch
            .into_iter()
            .map(|fields| StudentId::new(self.store(fields).to_string()))
            .collect())
    }

    async fn update_student(
        &self,
        id: &StudentId,
        fields: StudentFields,
    ) -> RepositoryResult<bool> {
        let native = Self::native_id(id)?;
        let mut students = self.students.write();
        match students.iter_mut().find(|s| s.id == native) {
            Some(stored) => {
                Self::merge(&mut stored.fields, fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_student(&self, id: &StudentId) -> RepositoryResult<bool> {
        let native = Self::native_id(id)?;
        let mut students = self.students.write();
        match students.iter().position(|s| s.id == native) {
            Some(index) => {
                students.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_all_students(&self, fields: StudentFields) -> RepositoryResult<u64> {
        let mut students = self.students.write();
        for stored in students.iter_mut() {
            Self::merge(&mut stored.fields, fields.clone());
        }
        Ok(students.len() as u64)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, serde_json::Value)]) -> StudentFields {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = LocalRepository::new();

        let id = repo
            .insert_student(fields(&[("name", json!("Asabeneh"))]))
            .await
            .unwrap();

        let record = repo.find_student(&id).await.unwrap().unwrap();
        assert_eq!(record.id(), Some(id));
        assert_eq!(record.fields().get("name"), Some(&json!("Asabeneh")));
    }

    #[tokio::test]
    async fn test_insert_strips_caller_supplied_id() {
        let repo = LocalRepository::new();

        let id = repo
            .insert_student(fields(&[
                (ID_FIELD, json!("attacker-chosen")),
                ("name", json!("David")),
            ]))
            .await
            .unwrap();

        assert_ne!(id.as_str(), "attacker-chosen");
        let record = repo.find_student(&id).await.unwrap().unwrap();
        assert_eq!(
            record.fields().get(ID_FIELD),
            Some(&json!(id.as_str()))
        );
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = LocalRepository::new();

        for name in ["first", "second", "third"] {
            repo.insert_student(fields(&[("name", json!(name))]))
                .await
                .unwrap();
        }

        let records = repo.list_students().await.unwrap();
        let names: Vec<&serde_json::Value> = records
            .iter()
            .map(|r| r.fields().get("name").unwrap())
            .collect();
        assert_eq!(names, vec![&json!("first"), &json!("second"), &json!("third")]);
    }

    #[tokio::test]
    async fn test_update_merges_without_dropping_fields() {
        let repo = LocalRepository::new();
        let id = repo
            .insert_student(fields(&[
                ("name", json!("Eyob")),
                ("country", json!("Finland")),
            ]))
            .await
            .unwrap();

        let matched = repo
            .update_student(&id, fields(&[("country", json!("Sweden"))]))
            .await
            .unwrap();
        assert!(matched);

        let record = repo.find_student(&id).await.unwrap().unwrap();
        assert_eq!(record.fields().get("name"), Some(&json!("Eyob")));
        assert_eq!(record.fields().get("country"), Some(&json!("Sweden")));
    }

    #[tokio::test]
    async fn test_update_cannot_rewrite_identifier() {
        let repo = LocalRepository::new();
        let id = repo
            .insert_student(fields(&[("name", json!("Lidiya"))]))
            .await
            .unwrap();

        repo.update_student(&id, fields(&[(ID_FIELD, json!("forged"))]))
            .await
            .unwrap();

        let record = repo.find_student(&id).await.unwrap().unwrap();
        assert_eq!(record.id(), Some(id));
    }

    #[tokio::test]
    async fn test_update_missing_student_reports_no_match() {
        let repo = LocalRepository::new();
        let absent = StudentId::new(Uuid::new_v4().to_string());

        let matched = repo
            .update_student(&absent, fields(&[("name", json!("none"))]))
            .await
            .unwrap();
        assert!(!matched);
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let repo = LocalRepository::new();
        let bogus = StudentId::new("not-a-uuid");

        let err = repo.find_student(&bogus).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidId(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_student() {
        let repo = LocalRepository::new();
        let id = repo
            .insert_student(fields(&[("name", json!("gone"))]))
            .await
            .unwrap();

        assert!(repo.delete_student(&id).await.unwrap());
        assert_eq!(repo.student_count(), 0);
        assert!(!repo.delete_student(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_all_touches_every_student() {
        let repo = LocalRepository::new();
        for name in ["a", "b", "c"] {
            repo.insert_student(fields(&[("name", json!(name))]))
                .await
                .unwrap();
        }

        let updated = repo
            .update_all_students(fields(&[("graduated", json!(true))]))
            .await
            .unwrap();
        assert_eq!(updated, 3);

        for record in repo.list_students().await.unwrap() {
            assert_eq!(record.fields().get("graduated"), Some(&json!(true)));
        }
    }

    #[tokio::test]
    async fn test_empty_merge_still_reports_match() {
        let repo = LocalRepository::new();
        let id = repo
            .insert_student(fields(&[("name", json!("kept"))]))
            .await
            .unwrap();

        assert!(repo.update_student(&id, StudentFields::new()).await.unwrap());
        assert_eq!(repo.update_all_students(StudentFields::new()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_batch_insert_returns_ids_in_order() {
        let repo = LocalRepository::new();

        let batch = vec![
            fields(&[("name", json!("one"))]),
            fields(&[("name", json!("two"))]),
        ];
        let ids = repo.insert_students(batch).await.unwrap();
        assert_eq!(ids.len(), 2);

        let first = repo.find_student(&ids[0]).await.unwrap().unwrap();
        assert_eq!(first.fields().get("name"), Some(&json!("one")));
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());
    }
}
