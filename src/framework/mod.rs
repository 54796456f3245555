//! Generic actor plumbing for session-like resources.
//!
//! An entity type implements [`ActorEntity`]; a [`ResourceActor`] owns every live
//! instance of it and processes requests one at a time; a cloneable
//! [`ResourceClient`] sends those requests over a channel.
//!
//! # Testing
//!
//! See [`mock`] for a scripted client that answers without spawning an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::{ActorClient, ResourceClient};
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
