//! Constants used throughout the hospital core crate.

/// Connection string used when `MONGO_DETAILS` is not set.
pub const DEFAULT_MONGO_DETAILS: &str = "mongodb://localhost:27017";

/// Database holding the patient collection.
pub const DEFAULT_DATABASE_NAME: &str = "patient";

/// Collection storing one document per patient.
pub const DEFAULT_COLLECTION_NAME: &str = "personal";

/// Stored document field names. `_id` is assigned by the store.
pub const FIELD_ID: &str = "_id";
pub const FIELD_FULLNAME: &str = "fullname";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_AGE: &str = "age";
