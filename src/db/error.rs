use crate::libs::messages::Message;
use rusqlite::ffi;
use thiserror::Error;

/// Failure of a single store operation.
///
/// The variants mirror the outcomes the HTTP layer distinguishes; see
/// `server::error` for the status code mapping.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// No row matched the given id.
    #[error("{0}")]
    NotFound(String),

    /// A unique column (category name) would be duplicated.
    #[error("{0}")]
    Conflict(String),

    /// The category is still referenced by at least one todo.
    #[error("{0}")]
    CategoryInUse(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn validation(msg: Message) -> Self {
        StoreError::Validation(msg.to_string())
    }

    pub fn not_found(msg: Message) -> Self {
        StoreError::NotFound(msg.to_string())
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// True when `error` is a `UNIQUE` constraint violation.
pub fn is_unique_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
