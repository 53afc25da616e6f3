//! MongoDB-backed patient store.
//!
//! One collection, one document per patient:
//!
//! ```text
//! { _id: ObjectId, fullname: String, email: String, gender: String, age: Int64 }
//! ```
//!
//! The `mongodb::Client` inside is pooled and safe to share across tasks, so a single
//! `MongoPatientStore` serves every request.

use super::store::{NewPatientDocument, PatientDocument, PatientStore};
use crate::constants::{FIELD_AGE, FIELD_EMAIL, FIELD_FULLNAME, FIELD_GENDER};
use crate::error::{PatientError, PatientResult};
use crate::patient::PatientChanges;
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection};

#[derive(Clone, Debug)]
pub struct MongoPatientStore {
    collection: Collection<PatientDocument>,
}

impl MongoPatientStore {
    /// Builds a client from `uri` and binds to `database.collection`.
    ///
    /// The driver connects lazily; an unreachable server surfaces on the first operation.
    ///
    /// # Errors
    ///
    /// Returns `PatientError::Connect` if the connection string cannot be parsed or the client
    /// cannot be constructed.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> PatientResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(PatientError::Connect)?;
        Ok(Self::from_client(&client, database, collection))
    }

    pub fn from_client(client: &Client, database: &str, collection: &str) -> Self {
        Self {
            collection: client.database(database).collection(collection),
        }
    }
}

/// Builds the `$set` body for a partial update. Absent fields are omitted, never nulled.
pub(crate) fn set_document(changes: &PatientChanges) -> Document {
    let mut set = Document::new();
    if let Some(fullname) = &changes.fullname {
        set.insert(FIELD_FULLNAME, fullname.as_str());
    }
    if let Some(email) = &changes.email {
        set.insert(FIELD_EMAIL, email.as_str());
    }
    if let Some(gender) = &changes.gender {
        set.insert(FIELD_GENDER, gender.as_str());
    }
    if let Some(age) = changes.age {
        set.insert(FIELD_AGE, age.get());
    }
    set
}

fn id_filter(id: ObjectId) -> Document {
    doc! { "_id": id }
}

#[async_trait]
impl PatientStore for MongoPatientStore {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn find_all(&self) -> PatientResult<Vec<PatientDocument>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(PatientError::Find)?;

        let mut patients = Vec::new();
        while cursor.advance().await.map_err(PatientError::Find)? {
            match cursor.deserialize_current() {
                Ok(patient) => patients.push(patient),
                Err(e) => {
                    tracing::warn!("skipping malformed patient document: {}", e);
                }
            }
        }

        Ok(patients)
    }

    async fn insert_one(&self, patient: NewPatientDocument) -> PatientResult<ObjectId> {
        let inserted = self
            .collection
            .clone_with_type::<NewPatientDocument>()
            .insert_one(patient)
            .await
            .map_err(PatientError::Insert)?;

        inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| PatientError::UnexpectedInsertedId(inserted.inserted_id.to_string()))
    }

    async fn find_one(&self, id: ObjectId) -> PatientResult<Option<PatientDocument>> {
        self.collection
            .find_one(id_filter(id))
            .await
            .map_err(PatientError::FindOne)
    }

    async fn update_one(&self, id: ObjectId, changes: &PatientChanges) -> PatientResult<bool> {
        let result = self
            .collection
            .update_one(id_filter(id), doc! { "$set": set_document(changes) })
            .await
            .map_err(PatientError::Update)?;

        Ok(result.matched_count > 0)
    }

    async fn delete_one(&self, id: ObjectId) -> PatientResult<bool> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .await
            .map_err(PatientError::Delete)?;

        Ok(result.deleted_count > 0)
    }
}
