#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown store backend: {0} (expected \"mongodb\" or \"memory\")")]
    UnknownStoreBackend(String),

    #[error("failed to connect to MongoDB: {0}")]
    Connect(mongodb::error::Error),
    #[error("failed to list patient documents: {0}")]
    Find(mongodb::error::Error),
    #[error("failed to read patient document: {0}")]
    FindOne(mongodb::error::Error),
    #[error("failed to insert patient document: {0}")]
    Insert(mongodb::error::Error),
    #[error("failed to update patient document: {0}")]
    Update(mongodb::error::Error),
    #[error("failed to delete patient document: {0}")]
    Delete(mongodb::error::Error),

    #[error("store returned a non-ObjectId inserted id: {0}")]
    UnexpectedInsertedId(String),
    #[error("inserted patient {0} could not be read back")]
    InsertedRecordMissing(String),
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;
