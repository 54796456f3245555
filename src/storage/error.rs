use thiserror::Error;

/// Failures of the key-value store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersistenceError {
    /// The backend refused the operation outright.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Stored data is not valid JSON: {0}")]
    Serialization(String),

    /// The background write was cancelled before it finished.
    #[error("Write cancelled")]
    Cancelled,
}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        PersistenceError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        PersistenceError::Serialization(e.to_string())
    }
}
