//! Startup, wiring and shutdown of the running app.

pub mod cafe_system;
pub mod config;
pub mod error;
pub mod tracing;

pub use cafe_system::{CafeSystem, Collaborators, PlacedReceipt};
pub use config::AppConfig;
pub use error::SystemError;
