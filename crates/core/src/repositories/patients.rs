//! Patient persistence adapter.
//!
//! [`PatientService`] is what the API layers call. It owns three concerns the stores do not:
//!
//! - Identifier parsing. Path identifiers arrive as strings; anything that is not a valid
//!   ObjectId is treated as "no such patient" rather than as an error.
//! - Existence checks. `update` and `delete` read the document first so that a missing patient
//!   is reported as `false` before any write is attempted.
//! - Mapping. Stored [`PatientDocument`]s become external [`Patient`]s.
//!
//! ## Pure Data Operations
//!
//! No envelopes, status codes or HTTP types appear here.

use super::store::{NewPatientDocument, PatientStore};
use crate::error::{PatientError, PatientResult};
use crate::patient::{NewPatient, Patient, PatientChanges};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

/// CRUD operations on patients over an injected [`PatientStore`].
#[derive(Clone)]
pub struct PatientService {
    store: Arc<dyn PatientStore>,
}

impl std::fmt::Debug for PatientService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatientService")
            .field("backend", &self.store.backend_name())
            .finish()
    }
}

/// Parses a path identifier. Malformed input yields `None`.
fn parse_patient_id(id: &str) -> Option<ObjectId> {
    match ObjectId::parse_str(id) {
        Ok(oid) => Some(oid),
        Err(e) => {
            tracing::debug!(id, "not a valid patient id: {}", e);
            None
        }
    }
}

impl PatientService {
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self { store }
    }

    /// Name of the backing store, for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Lists every stored patient in store-native order.
    ///
    /// # Returns
    ///
    /// An empty vector when the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns `PatientError` if the store cannot be read.
    pub async fn list_all(&self) -> PatientResult<Vec<Patient>> {
        let documents = self.store.find_all().await?;
        tracing::debug!(count = documents.len(), "listed patients");
        Ok(documents.into_iter().map(Patient::from).collect())
    }

    /// Inserts a new patient and returns it as re-read from the store.
    ///
    /// # Errors
    ///
    /// Returns `PatientError` if:
    /// - the insert fails,
    /// - the store reports an inserted id that is not an ObjectId,
    /// - the inserted document cannot be read back.
    pub async fn create(&self, patient: NewPatient) -> PatientResult<Patient> {
        let id = self
            .store
            .insert_one(NewPatientDocument::from(&patient))
            .await?;

        let stored = self
            .store
            .find_one(id)
            .await?
            .ok_or_else(|| PatientError::InsertedRecordMissing(id.to_hex()))?;

        tracing::info!(id = %id, "patient created");
        Ok(Patient::from(stored))
    }

    /// Fetches one patient.
    ///
    /// Returns `Ok(None)` when nothing matches or `id` is not a well-formed identifier.
    pub async fn get_by_id(&self, id: &str) -> PatientResult<Option<Patient>> {
        let Some(oid) = parse_patient_id(id) else {
            return Ok(None);
        };

        Ok(self.store.find_one(oid).await?.map(Patient::from))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    ///
    /// - `false` without touching the store if `changes` is empty
    /// - `false` if the id is malformed or no patient matches
    /// - otherwise whether the store matched the document when writing
    pub async fn update(&self, id: &str, changes: PatientChanges) -> PatientResult<bool> {
        if changes.is_empty() {
            tracing::debug!(id, "update with no fields ignored");
            return Ok(false);
        }

        let Some(oid) = parse_patient_id(id) else {
            return Ok(false);
        };

        if self.store.find_one(oid).await?.is_none() {
            return Ok(false);
        }

        let updated = self.store.update_one(oid, &changes).await?;
        if updated {
            tracing::info!(id, fields = changes.len(), "patient updated");
        }
        Ok(updated)
    }

    /// Deletes a patient.
    ///
    /// Returns `false` if the id is malformed or no patient matches.
    pub async fn delete(&self, id: &str) -> PatientResult<bool> {
        let Some(oid) = parse_patient_id(id) else {
            return Ok(false);
        };

        if self.store.find_one(oid).await?.is_none() {
            return Ok(false);
        }

        let deleted = self.store.delete_one(oid).await?;
        if deleted {
            tracing::info!(id, "patient deleted");
        }
        Ok(deleted)
    }
}
