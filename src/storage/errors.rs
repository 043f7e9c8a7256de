//! # Storage Errors

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Record store failures. All of them surface to HTTP clients as 500.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite engine error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A thread panicked while holding the connection
    #[error("connection lock poisoned")]
    LockPoisoned,

    /// Filesystem error while reading a dataset
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file did not contain a valid salary array
    #[error("invalid dataset: {0}")]
    Dataset(String),
}

impl StorageError {
    /// Stable short code used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::Database(_) => "database",
            StorageError::LockPoisoned => "lock_poisoned",
            StorageError::Io(_) => "io",
            StorageError::Dataset(_) => "dataset",
        }
    }
}
