//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads environment variables; the binaries
//! read them, build a [`CoreConfig`], and open the store from it.

use crate::{NonEmptyText, PatientError, PatientResult};
use std::str::FromStr;

/// Which [`PatientStore`](crate::PatientStore) implementation to open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB collection reached through `mongodb::Client`.
    #[default]
    MongoDb,
    /// Process-local store; contents are lost on exit.
    Memory,
}

impl StoreBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreBackend::MongoDb => "mongodb",
            StoreBackend::Memory => "memory",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = PatientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(PatientError::UnknownStoreBackend(other.to_string())),
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    store_backend: StoreBackend,
    mongo_details: String,
    database_name: NonEmptyText,
    collection_name: NonEmptyText,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `PatientError::InvalidInput` if the connection string, database name or
    /// collection name is empty.
    pub fn new(
        store_backend: StoreBackend,
        mongo_details: String,
        database_name: &str,
        collection_name: &str,
    ) -> PatientResult<Self> {
        if mongo_details.trim().is_empty() {
            return Err(PatientError::InvalidInput(
                "MongoDB connection string cannot be empty".into(),
            ));
        }

        let database_name = NonEmptyText::new(database_name)
            .map_err(|_| PatientError::InvalidInput("database name cannot be empty".into()))?;
        let collection_name = NonEmptyText::new(collection_name)
            .map_err(|_| PatientError::InvalidInput("collection name cannot be empty".into()))?;

        Ok(Self {
            store_backend,
            mongo_details: mongo_details.trim().to_string(),
            database_name,
            collection_name,
        })
    }

    pub fn store_backend(&self) -> StoreBackend {
        self.store_backend
    }

    pub fn mongo_details(&self) -> &str {
        &self.mongo_details
    }

    pub fn database_name(&self) -> &str {
        self.database_name.as_str()
    }

    pub fn collection_name(&self) -> &str {
        self.collection_name.as_str()
    }
}

/// Parse the store backend from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`StoreBackend::MongoDb`].
pub fn store_backend_from_env_value(value: Option<String>) -> PatientResult<StoreBackend> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<StoreBackend>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}
