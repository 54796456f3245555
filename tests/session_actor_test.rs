use async_trait::async_trait;
use cafe_order::framework::ActorClient;
use cafe_order::model::{
    Catalog, EmptyOrderPolicy, MenuItem, MenuItemId, OrderId, OrderStatus, CAPPUCCINO, ESPRESSO,
    LATTE, ORDER_ID_LIMIT,
};
use cafe_order::receipt::{decode, ReceiptWriter};
use cafe_order::session_actor::{
    self, OrderIdGenerator, SequentialOrderIds, SessionContext, SessionError,
};
use cafe_order::storage::{KeyValueStore, MemoryStore, PersistenceError, RECEIPT_KEY};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Always hands out the same order id.
struct FixedOrderIds(u32);

impl OrderIdGenerator for FixedOrderIds {
    fn next_id(&self) -> OrderId {
        OrderId(self.0)
    }
}

/// Refuses every write.
struct ReadOnlyStore;

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, _: &str) -> Result<Option<String>, PersistenceError> {
        Ok(None)
    }

    async fn set(&self, _: &str, _: String) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable("read-only".into()))
    }
}

fn context(store: Arc<dyn KeyValueStore>) -> SessionContext {
    SessionContext::new(Arc::new(Catalog::cafe()), ReceiptWriter::new(store))
}

/// Real session actor with an in-memory store, placed and then reset.
#[tokio::test]
async fn test_place_and_reset_through_actor() {
    let store = Arc::new(MemoryStore::new());
    let (actor, client) = session_actor::new(8);
    let handle = tokio::spawn(
        actor.run(context(store.clone()).with_order_ids(Arc::new(FixedOrderIds(4242)))),
    );

    let session = client.open_session(Some("alice".into())).await.unwrap();
    assert!(client.toggle(session, ESPRESSO).await.unwrap());
    assert!(client.toggle(session, LATTE).await.unwrap());
    assert_eq!(client.total(session).await.unwrap(), Decimal::new(600, 2));

    let placed = client.place_order(session).await.unwrap();
    assert_eq!(placed.order_id, OrderId(4242));
    assert_eq!(placed.receipt.selected_items, vec![ESPRESSO, LATTE]);

    // the snapshot already shows Placed, whether or not the write landed
    let snapshot = client.snapshot(session).await.unwrap();
    assert_eq!(snapshot.order_id(), Some(OrderId(4242)));

    placed.persistence.wait().await.unwrap();
    let raw = store.get(RECEIPT_KEY).await.unwrap().unwrap();
    assert_eq!(decode(&raw).unwrap(), placed.receipt);

    assert_eq!(
        client.place_order(session).await.unwrap_err(),
        SessionError::AlreadyPlaced(OrderId(4242))
    );
    assert_eq!(
        client.toggle(session, CAPPUCCINO).await,
        Err(SessionError::SelectionFrozen(OrderId(4242)))
    );

    client.reset(session).await.unwrap();
    let snapshot = client.snapshot(session).await.unwrap();
    assert_eq!(snapshot.status(), OrderStatus::Idle);
    assert!(snapshot.selection().is_empty());
    assert_eq!(client.total(session).await.unwrap(), Decimal::ZERO);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_receipt_write_keeps_order_placed() {
    let (actor, client) = session_actor::new(8);
    tokio::spawn(actor.run(context(Arc::new(ReadOnlyStore))));

    let session = client.open_session(None).await.unwrap();
    client.toggle(session, CAPPUCCINO).await.unwrap();
    let placed = client.place_order(session).await.unwrap();

    assert_eq!(
        placed.persistence.wait().await,
        Err(PersistenceError::Unavailable("read-only".into()))
    );
    let snapshot = client.snapshot(session).await.unwrap();
    assert!(snapshot.is_placed());
    assert_eq!(snapshot.order_id(), Some(placed.order_id));
    assert_eq!(placed.receipt.user_name, None);
}

#[tokio::test]
async fn test_random_order_ids_stay_in_range() {
    let (actor, client) = session_actor::new(8);
    tokio::spawn(actor.run(context(Arc::new(MemoryStore::new()))));

    let session = client.open_session(None).await.unwrap();
    for _ in 0..200 {
        client.toggle(session, ESPRESSO).await.unwrap();
        let placed = client.place_order(session).await.unwrap();
        assert!(placed.order_id.0 < ORDER_ID_LIMIT);
        client.reset(session).await.unwrap();
    }
}

#[tokio::test]
async fn test_empty_and_unknown_selections() {
    let (actor, client) = session_actor::new(8);
    tokio::spawn(actor.run(context(Arc::new(MemoryStore::new()))));

    let session = client.open_session(None).await.unwrap();
    assert_eq!(
        client.toggle(session, MenuItemId(99)).await,
        Err(SessionError::InvalidItem(MenuItemId(99)))
    );
    assert_eq!(
        client.place_order(session).await.unwrap_err(),
        SessionError::EmptySelection
    );
    assert!(!client.snapshot(session).await.unwrap().is_placed());

    let (actor, lenient) = session_actor::new(8);
    tokio::spawn(
        actor.run(context(Arc::new(MemoryStore::new())).with_empty_orders(EmptyOrderPolicy::Allow)),
    );
    let session = lenient.open_session(None).await.unwrap();
    let placed = lenient.place_order(session).await.unwrap();
    assert_eq!(placed.receipt.total_amount, Decimal::ZERO);
    assert!(placed.receipt.selected_items.is_empty());
}

#[tokio::test]
async fn test_sessions_are_independent_and_closable() {
    let (actor, client) = session_actor::new(8);
    tokio::spawn(actor.run(context(Arc::new(MemoryStore::new()))));

    let first = client.open_session(Some("alice".into())).await.unwrap();
    let second = client.open_session(Some("bob".into())).await.unwrap();
    assert_ne!(first, second);

    client.toggle(first, LATTE).await.unwrap();
    assert!(client.snapshot(second).await.unwrap().selection().is_empty());

    client.close(first).await.unwrap();
    assert!(client.get(first).await.unwrap().is_none());
    assert!(matches!(
        client.toggle(first, LATTE).await,
        Err(SessionError::NotFound(_))
    ));
    assert_eq!(
        client.snapshot(second).await.unwrap().user_name.as_deref(),
        Some("bob")
    );
}

/// Rejected placements must not use up sequential order numbers.
#[tokio::test]
async fn test_sequential_ids_have_no_gaps_after_rejections() {
    let (actor, client) = session_actor::new(8);
    let sequential = Arc::new(SequentialOrderIds::default());
    tokio::spawn(actor.run(context(Arc::new(MemoryStore::new())).with_order_ids(sequential)));

    let session = client.open_session(None).await.unwrap();
    assert_eq!(
        client.place_order(session).await.unwrap_err(),
        SessionError::EmptySelection
    );

    client.toggle(session, LATTE).await.unwrap();
    assert_eq!(client.place_order(session).await.unwrap().order_id, OrderId(0));
    // double tap on Place
    assert_eq!(
        client.place_order(session).await.unwrap_err(),
        SessionError::AlreadyPlaced(OrderId(0))
    );

    client.reset(session).await.unwrap();
    client.toggle(session, ESPRESSO).await.unwrap();
    assert_eq!(client.place_order(session).await.unwrap().order_id, OrderId(1));
}

/// Prices finer than two decimals come back from the store unchanged.
#[tokio::test]
async fn test_persisted_receipt_keeps_exact_total() {
    let price: Decimal = "12345678901234567.89".parse().unwrap();
    let catalog = Catalog::new(vec![MenuItem::new(7, "Reserve", price, "reserve.jpg")]).unwrap();
    let store = Arc::new(MemoryStore::new());
    let (actor, client) = session_actor::new(8);
    tokio::spawn(actor.run(SessionContext::new(
        Arc::new(catalog),
        ReceiptWriter::new(store.clone()),
    )));

    let session = client.open_session(None).await.unwrap();
    client.toggle(session, MenuItemId(7)).await.unwrap();
    let placed = client.place_order(session).await.unwrap();
    placed.persistence.wait().await.unwrap();

    let raw = store.get(RECEIPT_KEY).await.unwrap().unwrap();
    assert!(raw.contains(r#""totalAmount":12345678901234567.89"#));
    assert_eq!(decode(&raw).unwrap().total_amount, price);
}
