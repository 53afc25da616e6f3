//! Stored document shape and the storage seam.

use crate::error::PatientResult;
use crate::patient::{NewPatient, PatientChanges};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A patient exactly as it sits in the collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub fullname: String,
    pub email: String,
    pub gender: String,
    pub age: i64,
}

/// Insert payload: a [`PatientDocument`] without `_id`, which the store assigns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPatientDocument {
    pub fullname: String,
    pub email: String,
    pub gender: String,
    pub age: i64,
}

impl From<&NewPatient> for NewPatientDocument {
    fn from(patient: &NewPatient) -> Self {
        Self {
            fullname: patient.fullname.as_str().to_owned(),
            email: patient.email.as_str().to_owned(),
            gender: patient.gender.as_str().to_owned(),
            age: patient.age.get(),
        }
    }
}

impl NewPatientDocument {
    pub(crate) fn with_id(self, id: ObjectId) -> PatientDocument {
        PatientDocument {
            id,
            fullname: self.fullname,
            email: self.email,
            gender: self.gender,
            age: self.age,
        }
    }
}

/// Single-document operations against the patient collection.
///
/// Implementations only need per-document atomicity. Existence checks and id parsing live in
/// [`PatientService`](super::patients::PatientService), not here.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Every document in store-native order.
    async fn find_all(&self) -> PatientResult<Vec<PatientDocument>>;

    /// Inserts a document and returns the id the store assigned to it.
    async fn insert_one(&self, patient: NewPatientDocument) -> PatientResult<ObjectId>;

    async fn find_one(&self, id: ObjectId) -> PatientResult<Option<PatientDocument>>;

    /// Sets the supplied fields on the matching document.
    ///
    /// Returns `true` if a document matched `id`.
    async fn update_one(&self, id: ObjectId, changes: &PatientChanges) -> PatientResult<bool>;

    /// Returns `true` if a document was removed.
    async fn delete_one(&self, id: ObjectId) -> PatientResult<bool>;
}
