use crate::model::SessionId;
use thiserror::Error;

/// Errors raised while building or decoding a receipt.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReceiptError {
    /// Receipts only exist for placed orders.
    #[error("Session {0} has no placed order")]
    NotPlaced(SessionId),

    #[error("Failed to encode receipt: {0}")]
    Encode(String),

    #[error("Failed to decode receipt: {0}")]
    Decode(String),
}
