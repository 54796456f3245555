use super::{KeyValueStore, PersistenceError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// In-process store. Contents die with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let value = self.entries.read().await.get(key).cloned();
        debug!(key, found = value.is_some(), "Store get");
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), PersistenceError> {
        debug!(key, bytes = value.len(), "Store set");
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
