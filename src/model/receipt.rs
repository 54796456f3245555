//! The machine-readable record of a placed order.

use super::{MenuItemId, OrderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Canonical receipt content. Field order is the serialized key order:
/// `selectedItems`, `totalAmount`, `orderId`, `userName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub selected_items: Vec<MenuItemId>,
    /// A JSON number carrying every digit of the decimal.
    #[serde(with = "exact_number")]
    pub total_amount: Decimal,
    pub order_id: OrderId,
    /// Serialized as `null` when nobody is logged in.
    pub user_name: Option<String>,
}

mod exact_number {
    use rust_decimal::Decimal;
    use serde::Serializer;

    pub use rust_decimal::serde::arbitrary_precision::deserialize;

    // Trailing zeros are dropped, so 6.50 is written as 6.5.
    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&value.normalize(), serializer)
    }
}
