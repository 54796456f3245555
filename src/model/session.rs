//! Order sessions and their Idle/Placed state machine.
use crate::model::{Catalog, MenuItemId};
use crate::session_actor::SessionError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Upper bound (exclusive) of generated order ids.
pub const ORDER_ID_LIMIT: u32 = 100_000;

/// Order number shown to the customer and encoded in the receipt.
/// Not guaranteed unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chosen menu items, without duplicates, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<MenuItemId>,
}

impl Selection {
    /// Adds `item` if absent, removes it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, item: MenuItemId) -> bool {
        match self.items.iter().position(|id| *id == item) {
            Some(index) => {
                self.items.remove(index);
                false
            }
            None => {
                self.items.push(item);
                true
            }
        }
    }

    pub fn contains(&self, item: MenuItemId) -> bool {
        self.items.contains(&item)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItemId> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[MenuItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a MenuItemId;
    type IntoIter = std::slice::Iter<'a, MenuItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Lifecycle of a session. The order id only exists once placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderStatus {
    #[default]
    Idle,
    Placed { order_id: OrderId, total: Decimal },
}

impl OrderStatus {
    pub fn is_placed(&self) -> bool {
        matches!(self, OrderStatus::Placed { .. })
    }

    pub fn order_id(&self) -> Option<OrderId> {
        match self {
            OrderStatus::Idle => None,
            OrderStatus::Placed { order_id, .. } => Some(*order_id),
        }
    }
}

/// What to do when an order is placed with nothing selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyOrderPolicy {
    #[default]
    Reject,
    Allow,
}

impl FromStr for EmptyOrderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "allow" => Ok(Self::Allow),
            other => Err(format!("expected `reject` or `allow`, got `{other}`")),
        }
    }
}

/// The order being composed by one logged-in user.
///
/// # Actor Framework
/// This struct implements [`ActorEntity`](crate::framework::ActorEntity) so a
/// [`ResourceActor`](crate::framework::ResourceActor) can own many sessions at once.
/// See [`crate::session_actor`] for the action handling; the state machine
/// itself lives here as plain methods.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSession {
    pub id: SessionId,
    pub user_name: Option<String>,
    status: OrderStatus,
    selection: Selection,
}

/// Payload for opening a new session.
#[derive(Debug, Clone, Default)]
pub struct OrderSessionCreate {
    pub user_name: Option<String>,
}

impl OrderSession {
    /// Creates an idle session with nothing selected.
    pub fn new(id: SessionId, user_name: Option<String>) -> Self {
        Self {
            id,
            user_name,
            status: OrderStatus::Idle,
            selection: Selection::default(),
        }
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.status.order_id()
    }

    pub fn is_placed(&self) -> bool {
        self.status.is_placed()
    }

    /// Toggles `item` in the selection. Unknown items and placed orders are rejected.
    pub fn toggle(&mut self, item: MenuItemId, catalog: &Catalog) -> Result<bool, SessionError> {
        if let OrderStatus::Placed { order_id, .. } = self.status {
            return Err(SessionError::SelectionFrozen(order_id));
        }
        if !catalog.contains(item) {
            return Err(SessionError::InvalidItem(item));
        }
        Ok(self.selection.toggle(item))
    }

    /// Exact sum of unit prices over the selection.
    pub fn total_amount(&self, catalog: &Catalog) -> Result<Decimal, SessionError> {
        catalog
            .price_of(&self.selection)
            .map_err(SessionError::CatalogLookup)
    }

    /// Moves `Idle → Placed` and returns the new order id with the frozen total.
    ///
    /// `next_id` is only called once every check has passed, so a rejected
    /// placement never consumes an order number. Leaves the session untouched on error.
    pub fn place(
        &mut self,
        next_id: impl FnOnce() -> OrderId,
        catalog: &Catalog,
        empty_orders: EmptyOrderPolicy,
    ) -> Result<(OrderId, Decimal), SessionError> {
        if let OrderStatus::Placed { order_id, .. } = self.status {
            return Err(SessionError::AlreadyPlaced(order_id));
        }
        if self.selection.is_empty() && empty_orders == EmptyOrderPolicy::Reject {
            return Err(SessionError::EmptySelection);
        }
        let total = self.total_amount(catalog)?;
        let order_id = next_id();
        self.status = OrderStatus::Placed { order_id, total };
        Ok((order_id, total))
    }

    /// Back to `Idle` with an empty selection, whatever the current state.
    pub fn reset(&mut self) {
        self.status = OrderStatus::Idle;
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CAPPUCCINO, ESPRESSO, LATTE};
    use std::cell::Cell;

    fn session() -> OrderSession {
        OrderSession::new(SessionId(1), Some("alice".into()))
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let catalog = Catalog::cafe();
        for item in [ESPRESSO, LATTE, CAPPUCCINO] {
            let mut s = session();
            s.toggle(LATTE, &catalog).unwrap();
            let before = s.selection().clone();
            s.toggle(item, &catalog).unwrap();
            s.toggle(item, &catalog).unwrap();
            assert_eq!(s.selection(), &before);
        }
    }

    #[test]
    fn selection_keeps_pick_order_without_duplicates() {
        let mut selection = Selection::default();
        assert!(selection.toggle(CAPPUCCINO));
        assert!(selection.toggle(ESPRESSO));
        assert!(!selection.toggle(CAPPUCCINO));
        assert!(selection.toggle(CAPPUCCINO));
        assert_eq!(selection.as_slice(), &[ESPRESSO, CAPPUCCINO]);
    }

    #[test]
    fn totals_for_every_subset() {
        let catalog = Catalog::cafe();
        let prices = [
            (ESPRESSO, Decimal::new(250, 2)),
            (LATTE, Decimal::new(350, 2)),
            (CAPPUCCINO, Decimal::new(400, 2)),
        ];
        for mask in 0u8..8 {
            let mut s = session();
            let mut expected = Decimal::ZERO;
            for (bit, (id, price)) in prices.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    s.toggle(*id, &catalog).unwrap();
                    expected += *price;
                }
            }
            assert_eq!(s.total_amount(&catalog).unwrap(), expected, "mask {mask:03b}");
        }
    }

    #[test]
    fn espresso_and_latte_cost_six() {
        let catalog = Catalog::cafe();
        let mut s = session();
        s.toggle(ESPRESSO, &catalog).unwrap();
        s.toggle(LATTE, &catalog).unwrap();
        assert_eq!(s.total_amount(&catalog).unwrap(), Decimal::new(600, 2));
    }

    #[test]
    fn unknown_item_is_rejected() {
        let catalog = Catalog::cafe();
        let mut s = session();
        assert_eq!(
            s.toggle(MenuItemId(42), &catalog),
            Err(SessionError::InvalidItem(MenuItemId(42)))
        );
        assert!(s.selection().is_empty());
    }

    #[test]
    fn missing_catalog_entry_fails_total() {
        let mut s = session();
        s.toggle(LATTE, &Catalog::cafe()).unwrap();
        let tea_only = Catalog::new(vec![crate::model::MenuItem::new(
            9,
            "Tea",
            Decimal::ONE,
            "tea.jpg",
        )])
        .unwrap();
        assert_eq!(
            s.total_amount(&tea_only),
            Err(SessionError::CatalogLookup(LATTE))
        );
    }

    #[test]
    fn place_freezes_selection_and_rejects_second_place() {
        let catalog = Catalog::cafe();
        let mut s = session();
        s.toggle(ESPRESSO, &catalog).unwrap();
        s.toggle(CAPPUCCINO, &catalog).unwrap();

        let (order_id, total) = s
            .place(|| OrderId(77), &catalog, EmptyOrderPolicy::Reject)
            .unwrap();
        assert_eq!(order_id, OrderId(77));
        assert_eq!(total, Decimal::new(650, 2));
        assert_eq!(s.order_id(), Some(OrderId(77)));

        assert_eq!(
            s.toggle(LATTE, &catalog),
            Err(SessionError::SelectionFrozen(OrderId(77)))
        );
        assert_eq!(
            s.place(|| OrderId(78), &catalog, EmptyOrderPolicy::Reject),
            Err(SessionError::AlreadyPlaced(OrderId(77)))
        );
        assert_eq!(s.order_id(), Some(OrderId(77)));
        assert_eq!(s.selection().len(), 2);
    }

    #[test]
    fn empty_selection_follows_policy() {
        let catalog = Catalog::cafe();
        let mut s = session();
        assert_eq!(
            s.place(|| OrderId(1), &catalog, EmptyOrderPolicy::Reject),
            Err(SessionError::EmptySelection)
        );
        assert!(!s.is_placed());

        let (_, total) = s
            .place(|| OrderId(1), &catalog, EmptyOrderPolicy::Allow)
            .unwrap();
        assert_eq!(total, Decimal::ZERO);
        assert!(s.is_placed());
    }

    #[test]
    fn rejected_place_draws_no_order_id() {
        let catalog = Catalog::cafe();
        let mut s = session();
        let drawn = Cell::new(0);
        let next_id = || {
            drawn.set(drawn.get() + 1);
            OrderId(drawn.get())
        };

        assert!(s.place(next_id, &catalog, EmptyOrderPolicy::Reject).is_err());
        assert_eq!(drawn.get(), 0);

        s.toggle(ESPRESSO, &catalog).unwrap();
        s.place(next_id, &catalog, EmptyOrderPolicy::Reject).unwrap();
        assert!(s.place(next_id, &catalog, EmptyOrderPolicy::Reject).is_err());
        assert_eq!(drawn.get(), 1);
        assert_eq!(s.order_id(), Some(OrderId(1)));
    }

    #[test]
    fn reset_always_returns_to_idle() {
        let catalog = Catalog::cafe();
        let mut s = session();
        s.reset();
        assert_eq!(s.status(), OrderStatus::Idle);

        s.toggle(LATTE, &catalog).unwrap();
        s.place(|| OrderId(5), &catalog, EmptyOrderPolicy::Reject).unwrap();
        s.reset();
        assert_eq!(s.status(), OrderStatus::Idle);
        assert!(s.selection().is_empty());
        assert_eq!(s.order_id(), None);
        assert_eq!(s.total_amount(&catalog).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn empty_order_policy_parses() {
        assert_eq!("Allow".parse::<EmptyOrderPolicy>(), Ok(EmptyOrderPolicy::Allow));
        assert_eq!(" reject ".parse::<EmptyOrderPolicy>(), Ok(EmptyOrderPolicy::Reject));
        assert!("maybe".parse::<EmptyOrderPolicy>().is_err());
    }
}
