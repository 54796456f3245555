//! Background persistence of receipts.

use super::encoder::encode;
use crate::model::ReceiptPayload;
use crate::storage::{KeyValueStore, PersistenceError, RECEIPT_KEY};
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn, Instrument};

/// Writes receipts to the key-value store under [`RECEIPT_KEY`].
#[derive(Clone)]
pub struct ReceiptWriter {
    store: Arc<dyn KeyValueStore>,
}

impl ReceiptWriter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Writes `receipt` and waits for the store to acknowledge it.
    pub async fn persist_now(&self, receipt: &ReceiptPayload) -> Result<(), PersistenceError> {
        let raw = encode(receipt).map_err(|e| PersistenceError::Serialization(e.to_string()))?;
        self.store.set(RECEIPT_KEY, raw).await
    }

    /// Spawns the write and returns immediately.
    ///
    /// Failures are logged at `warn` inside the task and also returned from
    /// [`PersistHandle::wait`]. Must be called inside a Tokio runtime.
    pub fn persist(&self, receipt: &ReceiptPayload) -> PersistHandle {
        let writer = self.clone();
        let receipt = receipt.clone();
        let order_id = receipt.order_id;
        let span = tracing::info_span!("persist_receipt", %order_id);

        let task = tokio::spawn(
            async move {
                let result = writer.persist_now(&receipt).await;
                match &result {
                    Ok(()) => debug!("Receipt persisted"),
                    Err(e) => warn!(error = %e, "Receipt write failed"),
                }
                result
            }
            .instrument(span),
        );
        PersistHandle { task }
    }
}

impl fmt::Debug for ReceiptWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptWriter").finish_non_exhaustive()
    }
}

/// A pending receipt write. Dropping it detaches the write; it still runs.
#[derive(Debug)]
pub struct PersistHandle {
    task: JoinHandle<Result<(), PersistenceError>>,
}

impl PersistHandle {
    /// Waits for the write to finish.
    pub async fn wait(self) -> Result<(), PersistenceError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(PersistenceError::Cancelled),
            Err(e) => Err(PersistenceError::Unavailable(e.to_string())),
        }
    }

    /// Aborts the write if it has not completed yet.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemId, OrderId};
    use crate::receipt::decode;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _: &str) -> Result<Option<String>, PersistenceError> {
            Ok(None)
        }

        async fn set(&self, _: &str, _: String) -> Result<(), PersistenceError> {
            Err(PersistenceError::Unavailable("disk full".into()))
        }
    }

    // Never answers, so the write stays pending until aborted.
    struct StalledStore;

    #[async_trait]
    impl KeyValueStore for StalledStore {
        async fn get(&self, _: &str) -> Result<Option<String>, PersistenceError> {
            Ok(None)
        }

        async fn set(&self, _: &str, _: String) -> Result<(), PersistenceError> {
            std::future::pending().await
        }
    }

    fn receipt() -> ReceiptPayload {
        ReceiptPayload {
            selected_items: vec![MenuItemId(2)],
            total_amount: Decimal::new(350, 2),
            order_id: OrderId(99),
            user_name: None,
        }
    }

    #[tokio::test]
    async fn background_write_lands_in_store() {
        let store = Arc::new(MemoryStore::new());
        let writer = ReceiptWriter::new(store.clone());

        writer.persist(&receipt()).wait().await.unwrap();

        let raw = store.get(RECEIPT_KEY).await.unwrap().unwrap();
        assert_eq!(decode(&raw).unwrap(), receipt());
    }

    #[tokio::test]
    async fn failed_write_is_reported_by_wait() {
        let writer = ReceiptWriter::new(Arc::new(BrokenStore));
        let result = writer.persist(&receipt()).wait().await;
        assert_eq!(result, Err(PersistenceError::Unavailable("disk full".into())));
    }

    #[tokio::test]
    async fn cancelled_write_reports_cancelled() {
        let writer = ReceiptWriter::new(Arc::new(StalledStore));
        let handle = writer.persist(&receipt());
        handle.cancel();
        assert_eq!(handle.wait().await, Err(PersistenceError::Cancelled));
    }
}
