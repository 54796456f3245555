//! Request messages exchanged between [`ResourceClient`](super::ResourceClient)
//! and [`ResourceActor`](super::ResourceActor).

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request addressed to the actor owning entities of type `T`.
///
/// Four kinds of request:
///
/// - **Create**: open a new entity from [`ActorEntity::Create`]; replies with the fresh id.
/// - **Get**: read a clone of the current state.
/// - **Action**: run an entity-specific [`ActorEntity::Action`] against one instance.
/// - **Delete**: run [`ActorEntity::on_delete`] and drop the instance.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
