//! # ActorEntity Trait
//!
//! The contract a resource must satisfy to live inside a [`ResourceActor`](super::ResourceActor).
//! Associated types pin down the id, the creation payload, the action enum and
//! its result, the injected context and the error type, so a request meant for
//! one entity type cannot be sent to another.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can reach collaborators (storage, other clients).
/// Those collaborators arrive through `Context`, which is handed to
/// [`ResourceActor::run`](super::ResourceActor::run) rather than to `new`, so the
/// actor can be constructed before its dependencies exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier of one instance. Built from the actor's `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to open a new instance.
    type Create: Send + Sync + Debug;

    /// Entity-specific operations.
    type Action: Send + Sync + Debug;

    /// Result of an [`Action`](Self::Action).
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per entity; the framework boxes it into
    /// [`FrameworkError::EntityError`](super::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its freshly allocated id and creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the entity becomes visible.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Runs before the entity is dropped from the store. An error keeps it alive.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles one entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
