//! Patient persistence.
//!
//! - [`store`] defines the stored document wire model and the [`PatientStore`] seam.
//! - [`mongo`] and [`memory`] implement that seam.
//! - [`patients`] holds [`PatientService`], the adapter the API layers call.

pub mod memory;
pub mod mongo;
pub mod patients;
pub mod store;

use crate::config::{CoreConfig, StoreBackend};
use crate::error::PatientResult;
use memory::InMemoryPatientStore;
use mongo::MongoPatientStore;
use std::sync::Arc;
use store::PatientStore;

/// Opens the store selected by `cfg`.
///
/// The returned handle is meant to be created once at startup and shared by every request.
///
/// # Errors
///
/// Returns `PatientError::Connect` if the MongoDB client cannot be constructed from the
/// configured connection string.
pub async fn open_store(cfg: &CoreConfig) -> PatientResult<Arc<dyn PatientStore>> {
    let store: Arc<dyn PatientStore> = match cfg.store_backend() {
        StoreBackend::MongoDb => Arc::new(
            MongoPatientStore::connect(
                cfg.mongo_details(),
                cfg.database_name(),
                cfg.collection_name(),
            )
            .await?,
        ),
        StoreBackend::Memory => Arc::new(InMemoryPatientStore::new()),
    };

    tracing::info!(backend = store.backend_name(), "patient store opened");
    Ok(store)
}
