//! # Session Client
//!
//! High-level API over the session actor. Wraps a `ResourceClient<OrderSession>`
//! and turns framework failures back into [`SessionError`].
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{MenuItemId, OrderSession, OrderSessionCreate, SessionId};
use crate::session_actor::{PlacedOrder, SessionAction, SessionActionResult, SessionError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<OrderSession>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<OrderSession>) -> Self {
        Self { inner }
    }

    /// Opens an idle session for `user_name`.
    #[instrument(skip(self))]
    pub async fn open_session(&self, user_name: Option<String>) -> Result<SessionId, SessionError> {
        debug!("Sending request");
        self.inner
            .create(OrderSessionCreate { user_name })
            .await
            .map_err(Self::map_error)
    }

    /// Returns whether `item` is selected afterwards.
    #[instrument(skip(self))]
    pub async fn toggle(&self, id: SessionId, item: MenuItemId) -> Result<bool, SessionError> {
        match self.action(id, SessionAction::ToggleSelection(item)).await? {
            SessionActionResult::Toggled { selected, .. } => Ok(selected),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, id: SessionId) -> Result<PlacedOrder, SessionError> {
        match self.action(id, SessionAction::PlaceOrder).await? {
            SessionActionResult::Placed(placed) => Ok(placed),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn reset(&self, id: SessionId) -> Result<(), SessionError> {
        match self.action(id, SessionAction::ResetOrder).await? {
            SessionActionResult::Reset => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn total(&self, id: SessionId) -> Result<Decimal, SessionError> {
        match self.action(id, SessionAction::TotalAmount).await? {
            SessionActionResult::Total(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    /// A copy of the session as the actor currently holds it.
    pub async fn snapshot(&self, id: SessionId) -> Result<OrderSession, SessionError> {
        self.get(id)
            .await?
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Removes the session from the actor.
    pub async fn close(&self, id: SessionId) -> Result<(), SessionError> {
        self.delete(id).await
    }

    async fn action(
        &self,
        id: SessionId,
        action: SessionAction,
    ) -> Result<SessionActionResult, SessionError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: SessionActionResult) -> SessionError {
    SessionError::ActorCommunicationError(format!("Unexpected reply: {result:?}"))
}

#[async_trait]
impl ActorClient<OrderSession> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<OrderSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<SessionError>() {
            Ok(session_error) => session_error,
            Err(FrameworkError::NotFound(id)) => SessionError::NotFound(id),
            Err(other) => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}
