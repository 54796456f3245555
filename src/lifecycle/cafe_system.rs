use super::{AppConfig, SystemError};
use crate::auth::{CredentialVerifier, StoredCredentials};
use crate::clients::SessionClient;
use crate::model::{Catalog, OrderId, ReceiptPayload, SessionId, UserRecord};
use crate::navigation::{Navigator, Screen, TracingNavigator};
use crate::receipt::{
    decode, encode_for_display, OrderSummary, PersistHandle, QrRenderer, ReceiptWriter,
    TracingQrRenderer,
};
use crate::session_actor::{self, SessionContext};
use crate::storage::{FileStore, KeyValueStore, MemoryStore, RECEIPT_KEY};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// The external services the app talks to.
///
/// [`Collaborators::new`] logs navigation and QR hand-offs and checks
/// credentials against `store`; replace any field to observe or fake it.
pub struct Collaborators {
    pub store: Arc<dyn KeyValueStore>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub navigator: Arc<dyn Navigator>,
    pub qr_renderer: Arc<dyn QrRenderer>,
}

impl Collaborators {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            credentials: Arc::new(StoredCredentials::new(store.clone())),
            store,
            navigator: Arc::new(TracingNavigator),
            qr_renderer: Arc::new(TracingQrRenderer),
        }
    }
}

/// Everything the confirmation screen needs after a successful order.
#[derive(Debug)]
pub struct PlacedReceipt {
    pub order_id: OrderId,
    pub receipt: ReceiptPayload,
    pub summary: OrderSummary,
    /// The string given to the QR renderer.
    pub qr_data: String,
    /// The receipt write still in flight.
    pub persistence: PersistHandle,
}

/// The runtime orchestrator of the cafe app.
///
/// `CafeSystem` is responsible for:
/// - **Lifecycle Management**: starting the session actor and stopping it on shutdown
/// - **Dependency Wiring**: handing catalog, receipt writer and order id source to the actor
/// - **Screen Flow**: register → Login, login → MainApp, logout → HomeScreen
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::new(AppConfig::from_env()).await?;
///
/// system.register("alice", "secret").await?;
/// let session = system.login("alice", "secret").await?;
/// system.sessions.toggle(session, ESPRESSO).await?;
/// let placed = system.place_order(session).await?;
/// println!("{}", placed.summary);
///
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    /// Client for the session actor. Selection and totals go through here directly.
    pub sessions: SessionClient,
    catalog: Arc<Catalog>,
    store: Arc<dyn KeyValueStore>,
    credentials: Arc<dyn CredentialVerifier>,
    navigator: Arc<dyn Navigator>,
    qr_renderer: Arc<dyn QrRenderer>,
    qr_size: u32,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Opens the configured store and starts the system with logging collaborators.
    pub async fn new(config: AppConfig) -> Result<Self, SystemError> {
        let store: Arc<dyn KeyValueStore> = match &config.store_path {
            Some(path) => Arc::new(FileStore::open(path).await?),
            None => Arc::new(MemoryStore::new()),
        };
        Ok(Self::with_collaborators(
            config,
            Catalog::cafe(),
            Collaborators::new(store),
        ))
    }

    /// Starts the session actor with the given catalog and collaborators.
    /// Must be called inside a Tokio runtime.
    pub fn with_collaborators(
        config: AppConfig,
        catalog: Catalog,
        collaborators: Collaborators,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let receipts = ReceiptWriter::new(collaborators.store.clone());
        let context = SessionContext::new(catalog.clone(), receipts)
            .with_order_ids(config.order_ids.generator())
            .with_empty_orders(config.empty_orders);

        let (actor, sessions) = session_actor::new(config.channel_buffer);
        let handle = tokio::spawn(actor.run(context));
        info!(
            buffer = config.channel_buffer,
            items = catalog.items().len(),
            "Cafe system started"
        );

        Self {
            sessions,
            catalog,
            store: collaborators.store,
            credentials: collaborators.credentials,
            navigator: collaborators.navigator,
            qr_renderer: collaborators.qr_renderer,
            qr_size: config.qr_size,
            handles: vec![handle],
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Home screen buttons.
    pub fn show_register(&self) {
        self.navigator.navigate(Screen::Register);
    }

    pub fn show_login(&self) {
        self.navigator.navigate(Screen::Login);
    }

    /// Saves the account, replacing any earlier one, then shows the login screen.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<(), SystemError> {
        self.credentials
            .register(UserRecord::new(username, password))
            .await?;
        self.navigator.navigate(Screen::Login);
        Ok(())
    }

    /// Checks the credentials and opens a session for the user.
    ///
    /// On failure nothing changes: no session is opened and the screen stays put.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionId, SystemError> {
        let record = self.credentials.verify(username, password).await?;
        let session = self.sessions.open_session(Some(record.username)).await?;
        self.navigator.navigate(Screen::MainApp);
        Ok(session)
    }

    /// Places the order, renders the receipt as a QR code and builds the summary.
    ///
    /// The receipt write runs in the background; await
    /// [`PlacedReceipt::persistence`] to know it landed.
    #[instrument(skip(self))]
    pub async fn place_order(&self, session: SessionId) -> Result<PlacedReceipt, SystemError> {
        let placed = self.sessions.place_order(session).await?;
        let qr_data = encode_for_display(&placed.receipt)?;
        self.qr_renderer.render(&qr_data, self.qr_size);
        let summary = OrderSummary::from_receipt(&placed.receipt, &self.catalog);

        Ok(PlacedReceipt {
            order_id: placed.order_id,
            receipt: placed.receipt,
            summary,
            qr_data,
            persistence: placed.persistence,
        })
    }

    /// Closes the session and returns to the home screen.
    #[instrument(skip(self))]
    pub async fn logout(&self, session: SessionId) -> Result<(), SystemError> {
        self.sessions.close(session).await?;
        self.navigator.navigate(Screen::HomeScreen);
        Ok(())
    }

    /// The last persisted receipt, if any.
    pub async fn stored_receipt(&self) -> Result<Option<ReceiptPayload>, SystemError> {
        match self.store.get(RECEIPT_KEY).await? {
            Some(raw) => Ok(Some(decode(&raw)?)),
            None => Ok(None),
        }
    }

    /// Drops the session client and waits for the actor to drain.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down cafe system...");
        drop(self.sessions);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ShutdownFailed(format!("{e:?}")));
            }
        }

        info!("Cafe system shutdown complete.");
        Ok(())
    }
}
