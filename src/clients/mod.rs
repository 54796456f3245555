//! Domain clients that hide the actor message passing.

pub mod session_client;

pub use session_client::SessionClient;
