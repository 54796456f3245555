use crate::storage::PersistenceError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// No account, an unreadable account, or a mismatch. Callers cannot tell which.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Registration could not be saved.
    #[error("Failed to store account: {0}")]
    Storage(#[from] PersistenceError),
}
