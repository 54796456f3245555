//! Plaintext credential check over the key-value store.

use super::AuthError;
use crate::model::UserRecord;
use crate::storage::{KeyValueStore, USER_KEY};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Decides whether a username/password pair may log in.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Stores `record`, replacing any earlier account.
    async fn register(&self, record: UserRecord) -> Result<(), AuthError>;

    /// Returns the matching account or [`AuthError::InvalidCredentials`].
    async fn verify(&self, username: &str, password: &str) -> Result<UserRecord, AuthError>;

    /// The stored account, if one can be read.
    async fn current_user(&self) -> Option<UserRecord>;
}

/// Compares against the single [`UserRecord`] saved under [`USER_KEY`].
#[derive(Clone)]
pub struct StoredCredentials {
    store: Arc<dyn KeyValueStore>,
}

impl StoredCredentials {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CredentialVerifier for StoredCredentials {
    #[instrument(skip(self))]
    async fn register(&self, record: UserRecord) -> Result<(), AuthError> {
        let raw = serde_json::to_string(&record)
            .map_err(|e| AuthError::Storage(e.into()))?;
        self.store.set(USER_KEY, raw).await?;
        info!(username = %record.username, "User registered");
        Ok(())
    }

    #[instrument(skip(self, password))]
    async fn verify(&self, username: &str, password: &str) -> Result<UserRecord, AuthError> {
        match self.current_user().await {
            Some(record) if record.matches(username, password) => {
                info!("Login accepted");
                Ok(record)
            }
            _ => {
                warn!("Login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    async fn current_user(&self) -> Option<UserRecord> {
        let raw = match self.store.get(USER_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Could not read stored user");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "Stored user is corrupt");
                None
            }
        }
    }
}
