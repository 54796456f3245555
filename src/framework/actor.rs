//! # Generic Actor Server
//!
//! [`ResourceActor`] is the server half: it owns the entity store and the
//! receiving end of the request channel.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages every live instance of `T`.
///
/// **Concurrency Model**: requests are handled one after another inside a single
/// Tokio task, so the `store` needs no `Mutex`. Exclusive ownership of the state
/// by the task is what makes each request atomic from the caller's point of view.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass collaborators into `actor.run(context)`.
/// 3. **Run**: spawn the run loop; drop every client to stop it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the channel capacity; once full, client calls wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // "OrderSession" rather than "cafe_order::model::session::OrderSession"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // A loyalty stamp card: enough behaviour to drive every request type.
    #[derive(Clone, Debug, PartialEq)]
    struct StampCard {
        id: u32,
        owner: String,
        stamps: u8,
    }

    #[derive(Debug)]
    struct StampCardCreate {
        owner: String,
    }

    #[derive(Debug)]
    enum StampAction {
        Stamp,
    }

    #[derive(Debug, thiserror::Error)]
    enum StampError {
        #[error("card is full")]
        Full,
        #[error("owner name is empty")]
        NoOwner,
    }

    #[async_trait]
    impl ActorEntity for StampCard {
        type Id = u32;
        type Create = StampCardCreate;
        type Action = StampAction;
        type ActionResult = u8;
        type Context = u8;
        type Error = StampError;

        fn from_create_params(id: u32, params: StampCardCreate) -> Result<Self, StampError> {
            if params.owner.is_empty() {
                return Err(StampError::NoOwner);
            }
            Ok(Self {
                id,
                owner: params.owner,
                stamps: 0,
            })
        }

        async fn handle_action(&mut self, action: StampAction, max: &u8) -> Result<u8, StampError> {
            match action {
                StampAction::Stamp if self.stamps >= *max => Err(StampError::Full),
                StampAction::Stamp => {
                    self.stamps += 1;
                    Ok(self.stamps)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_actor_full_lifecycle() {
        let (actor, client) = ResourceActor::<StampCard>::new(8);
        let handle = tokio::spawn(actor.run(2));

        let id = client
            .create(StampCardCreate {
                owner: "alice".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, StampAction::Stamp).await.unwrap(), 1);
        assert_eq!(client.perform_action(id, StampAction::Stamp).await.unwrap(), 2);

        let err = client.perform_action(id, StampAction::Stamp).await.unwrap_err();
        assert!(matches!(
            err.into_entity_error::<StampError>(),
            Ok(StampError::Full)
        ));

        let card = client.get(id).await.unwrap().unwrap();
        assert_eq!(card.owner, "alice");
        assert_eq!(card.stamps, 2);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_store_slot() {
        let (actor, client) = ResourceActor::<StampCard>::new(8);
        tokio::spawn(actor.run(10));

        let err = client
            .create(StampCardCreate {
                owner: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.into_entity_error::<StampError>(),
            Ok(StampError::NoOwner)
        ));

        // ids keep counting even though the first create failed
        let id = client
            .create(StampCardCreate { owner: "bob".into() })
            .await
            .unwrap();
        assert_eq!(id, 2);
        assert!(client.get(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_ids_report_not_found() {
        let (actor, client) = ResourceActor::<StampCard>::new(8);
        tokio::spawn(actor.run(10));

        assert!(matches!(
            client.perform_action(42, StampAction::Stamp).await,
            Err(FrameworkError::NotFound(id)) if id == "42"
        ));
        assert!(matches!(
            client.delete(42).await,
            Err(FrameworkError::NotFound(_))
        ));
    }
}
