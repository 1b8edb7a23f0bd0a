//! Storage errors.

use thiserror::Error;

/// Errors from the backing key-value store.
///
/// Only the write path surfaces these; reads degrade to an empty cart.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error from a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the value would exceed the store's capacity.
    #[error("quota exceeded writing {key:?}: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The store cannot be used at all (e.g. disabled or poisoned).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The cart could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
