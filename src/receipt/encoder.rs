//! Pure conversions between sessions, payloads and the canonical string.

use super::ReceiptError;
use crate::model::{OrderSession, OrderStatus, ReceiptPayload};

/// Builds the receipt for a placed session.
///
/// The total is the one frozen at placement, so catalog changes after the
/// fact do not alter the receipt.
pub fn build_receipt(
    session: &OrderSession,
    user_name: Option<&str>,
) -> Result<ReceiptPayload, ReceiptError> {
    match session.status() {
        OrderStatus::Idle => Err(ReceiptError::NotPlaced(session.id)),
        OrderStatus::Placed { order_id, total } => Ok(ReceiptPayload {
            selected_items: session.selection().as_slice().to_vec(),
            total_amount: total,
            order_id,
            user_name: user_name.map(str::to_string),
        }),
    }
}

/// Canonical JSON: compact, fixed key order.
pub fn encode(payload: &ReceiptPayload) -> Result<String, ReceiptError> {
    serde_json::to_string(payload).map_err(|e| ReceiptError::Encode(e.to_string()))
}

/// The string handed to the QR renderer. Identical to the persisted one.
pub fn encode_for_display(payload: &ReceiptPayload) -> Result<String, ReceiptError> {
    encode(payload)
}

pub fn decode(raw: &str) -> Result<ReceiptPayload, ReceiptError> {
    serde_json::from_str(raw).map_err(|e| ReceiptError::Decode(e.to_string()))
}
