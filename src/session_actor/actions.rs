//! Custom actions for the session actor.
//!
//! Each variant is one state-machine step, handled atomically by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{MenuItemId, OrderId, ReceiptPayload};
use crate::receipt::PersistHandle;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Adds or removes one menu item. Only legal while idle.
    ToggleSelection(MenuItemId),
    /// Freezes the selection under a fresh order id and writes the receipt.
    PlaceOrder,
    /// Returns to idle with nothing selected.
    ResetOrder,
    TotalAmount,
}

/// Results from [`SessionAction`]s; variants match 1:1.
#[derive(Debug)]
pub enum SessionActionResult {
    Toggled { item: MenuItemId, selected: bool },
    Placed(PlacedOrder),
    Reset,
    Total(Decimal),
}

/// What `PlaceOrder` hands back: the new id, the receipt, and the pending write.
#[derive(Debug)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub receipt: ReceiptPayload,
    pub persistence: PersistHandle,
}
