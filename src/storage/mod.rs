//! # Key-Value Persistence
//!
//! The app keeps two strings on the device: the registered user and the last
//! receipt. [`KeyValueStore`] is the seam; [`MemoryStore`] and [`FileStore`]
//! are the two backends.

pub mod error;
pub mod file;
pub mod memory;

pub use error::PersistenceError;
pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Key holding the JSON [`UserRecord`](crate::model::UserRecord).
pub const USER_KEY: &str = "user";

/// Key holding the canonical receipt string.
pub const RECEIPT_KEY: &str = "qrCodeData";

/// String-keyed async storage. `set` overwrites.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    async fn set(&self, key: &str, value: String) -> Result<(), PersistenceError>;
}
