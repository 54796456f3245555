//! The static menu catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use thiserror::Error;

/// Stable identifier of a menu item. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

pub const ESPRESSO: MenuItemId = MenuItemId(1);
pub const LATTE: MenuItemId = MenuItemId(2);
pub const CAPPUCCINO: MenuItemId = MenuItemId(3);

/// Opaque handle to an image asset. The core never opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(asset: impl Into<String>) -> Self {
        Self(asset.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub unit_price: Decimal,
    pub image: ImageRef,
}

impl MenuItem {
    pub fn new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        unit_price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image: ImageRef::new(image),
        }
    }
}

/// Reasons a catalog refuses its item list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate menu item id: {0}")]
    DuplicateItem(MenuItemId),

    #[error("Negative price for menu item {0}")]
    NegativePrice(MenuItemId),
}

/// The fixed set of purchasable items, kept in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and negative prices.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateItem(item.id));
            }
            if item.unit_price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(item.id));
            }
        }
        Ok(Self { items })
    }

    /// The cafe's coffee menu.
    pub fn cafe() -> Self {
        Self {
            items: vec![
                MenuItem::new(ESPRESSO, "Espresso", Decimal::new(250, 2), "espresso.jpg"),
                MenuItem::new(LATTE, "Latte", Decimal::new(350, 2), "latte.jpg"),
                MenuItem::new(CAPPUCCINO, "Cappuccino", Decimal::new(400, 2), "cappuccino.jpg"),
            ],
        }
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: MenuItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Sums unit prices over `ids`. The first id without an entry is returned as the error.
    pub fn price_of<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a MenuItemId>,
    ) -> Result<Decimal, MenuItemId> {
        ids.into_iter().try_fold(Decimal::ZERO, |total, id| {
            self.get(*id)
                .map(|item| total + item.unit_price)
                .ok_or(*id)
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::cafe()
    }
}
