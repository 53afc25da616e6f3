//! Process-local patient store.
//!
//! Used for development runs without a database (`HOSPITAL_STORE=memory`) and by the test
//! suites. Documents keep insertion order, which stands in for store-native order.

use super::store::{NewPatientDocument, PatientDocument, PatientStore};
use crate::error::PatientResult;
use crate::patient::PatientChanges;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryPatientStore {
    documents: RwLock<Vec<PatientDocument>>,
}

impl InMemoryPatientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl PatientStore for InMemoryPatientStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find_all(&self) -> PatientResult<Vec<PatientDocument>> {
        Ok(self.documents.read().await.clone())
    }

    async fn insert_one(&self, patient: NewPatientDocument) -> PatientResult<ObjectId> {
        let id = ObjectId::new();
        self.documents.write().await.push(patient.with_id(id));
        Ok(id)
    }

    async fn find_one(&self, id: ObjectId) -> PatientResult<Option<PatientDocument>> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .find(|doc| doc.id == id)
            .cloned())
    }

    async fn update_one(&self, id: ObjectId, changes: &PatientChanges) -> PatientResult<bool> {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|doc| doc.id == id) {
            Some(doc) => {
                changes.apply_to(doc);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_one(&self, id: ObjectId) -> PatientResult<bool> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|doc| doc.id != id);
        Ok(documents.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_doc(fullname: &str) -> NewPatientDocument {
        NewPatientDocument {
            fullname: fullname.into(),
            email: "a@x.com".into(),
            gender: "male".into(),
            age: 30,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids_in_order() {
        let store = InMemoryPatientStore::new();
        let first = store.insert_one(new_doc("First")).await.unwrap();
        let second = store.insert_one(new_doc("Second")).await.unwrap();

        assert_ne!(first, second);
        let all = store.find_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|d| d.fullname.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_matches() {
        let store = InMemoryPatientStore::new();
        let id = store.insert_one(new_doc("First")).await.unwrap();
        let missing = ObjectId::new();

        let changes = PatientChanges {
            fullname: Some(crate::NonEmptyText::new("Renamed").unwrap()),
            ..Default::default()
        };
        assert!(store.update_one(id, &changes).await.unwrap());
        assert!(!store.update_one(missing, &changes).await.unwrap());

        assert!(!store.delete_one(missing).await.unwrap());
        assert!(store.delete_one(id).await.unwrap());
        assert!(store.is_empty().await);
    }
}
