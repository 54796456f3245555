use crate::auth::AuthError;
use crate::receipt::ReceiptError;
use crate::session_actor::SessionError;
use crate::storage::PersistenceError;
use thiserror::Error;

/// Failures surfaced by [`CafeSystem`](super::CafeSystem).
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Actor task failed: {0}")]
    ShutdownFailed(String),
}
