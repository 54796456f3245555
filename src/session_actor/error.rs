//! Error types for the session actor.

use crate::model::{MenuItemId, OrderId};
use crate::receipt::ReceiptError;
use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// No session with this id is open.
    #[error("Session not found: {0}")]
    NotFound(String),

    /// The item is not on the menu.
    #[error("Unknown menu item: {0}")]
    InvalidItem(MenuItemId),

    /// A selected item has no catalog entry, so no total can be computed.
    #[error("No price for menu item: {0}")]
    CatalogLookup(MenuItemId),

    /// The selection cannot change after the order is placed.
    #[error("Order {0} is placed, selection is frozen")]
    SelectionFrozen(OrderId),

    #[error("Order {0} is already placed")]
    AlreadyPlaced(OrderId),

    #[error("Cannot place an empty order")]
    EmptySelection,

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
