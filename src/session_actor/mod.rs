//! # Session Actor
//!
//! Owns every open [`OrderSession`] and applies the order state machine one
//! request at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) impl for [`OrderSession`]
//! - [`actions`] - [`SessionAction`] and its results
//! - [`error`] - [`SessionError`]
//! - [`order_ids`] - order number generators
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = session_actor::new(32);
//! tokio::spawn(actor.run(SessionContext::new(catalog, writer)));
//!
//! let session = client.open_session(Some("alice".into())).await?;
//! client.toggle(session, ESPRESSO).await?;
//! let placed = client.place_order(session).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod order_ids;

pub use actions::*;
pub use error::*;
pub use order_ids::*;

use crate::clients::SessionClient;
use crate::framework::ResourceActor;
use crate::model::{Catalog, EmptyOrderPolicy, OrderSession};
use crate::receipt::ReceiptWriter;
use std::sync::Arc;

/// Collaborators injected into the session actor at `run`.
#[derive(Clone)]
pub struct SessionContext {
    pub catalog: Arc<Catalog>,
    pub receipts: ReceiptWriter,
    pub order_ids: Arc<dyn OrderIdGenerator>,
    pub empty_orders: EmptyOrderPolicy,
}

impl SessionContext {
    /// Random order ids, empty orders rejected.
    pub fn new(catalog: Arc<Catalog>, receipts: ReceiptWriter) -> Self {
        Self {
            catalog,
            receipts,
            order_ids: Arc::new(RandomOrderIds),
            empty_orders: EmptyOrderPolicy::default(),
        }
    }

    pub fn with_order_ids(mut self, order_ids: Arc<dyn OrderIdGenerator>) -> Self {
        self.order_ids = order_ids;
        self
    }

    pub fn with_empty_orders(mut self, policy: EmptyOrderPolicy) -> Self {
        self.empty_orders = policy;
        self
    }
}

/// Creates a new session actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderSession>, SessionClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SessionClient::new(generic_client))
}
