//! # Hospital Core
//!
//! Core persistence logic for the hospital patient service.
//!
//! This crate contains pure data operations against the patient document collection:
//! - Mapping between stored documents and the external [`Patient`] shape
//! - Create, list, read, partial update and delete through [`PatientService`]
//! - Store backends behind the [`PatientStore`] trait (MongoDB and in-memory)
//!
//! **No API concerns**: HTTP servers, envelopes and OpenAPI schemas belong in `api-rest` or
//! `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod patient;
pub mod repositories;

pub use config::{store_backend_from_env_value, CoreConfig, StoreBackend};
pub use constants::{DEFAULT_COLLECTION_NAME, DEFAULT_DATABASE_NAME, DEFAULT_MONGO_DETAILS};
pub use error::{PatientError, PatientResult};
pub use patient::{NewPatient, Patient, PatientChanges};
pub use repositories::{
    memory::InMemoryPatientStore, mongo::MongoPatientStore, open_store, patients::PatientService,
    store::NewPatientDocument, store::PatientDocument, store::PatientStore,
};

pub use mongodb::bson::oid::ObjectId;

pub use hospital_types::{
    AgeError, EmailAddress, EmailError, NonEmptyText, PatientAge, TextError,
};
