use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage failure: {message}")]
    Backend {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct a storage error from any backend failure.
    pub fn backend(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Backend {
            message,
            source: Box::new(source),
        }
    }
}
