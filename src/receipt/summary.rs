//! The confirmation shown after an order is placed.

use crate::model::{Catalog, OrderId, ReceiptPayload};
use rust_decimal::Decimal;
use std::fmt;

/// Human-readable view of a placed order.
///
/// ```text
/// Order Placed Successfully!
/// Ordered Items: Espresso, Cappuccino
/// Total Amount: €6.50
/// Order ID: 123
/// Name: alice
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub item_names: Vec<String>,
    pub total_amount: Decimal,
    pub order_id: OrderId,
    pub user_name: Option<String>,
}

impl OrderSummary {
    /// Resolves item names through `catalog`. Ids it does not know are shown
    /// by their numeric id.
    pub fn from_receipt(receipt: &ReceiptPayload, catalog: &Catalog) -> Self {
        let item_names = receipt
            .selected_items
            .iter()
            .map(|id| match catalog.get(*id) {
                Some(item) => item.name.clone(),
                None => id.0.to_string(),
            })
            .collect();
        Self {
            item_names,
            total_amount: receipt.total_amount,
            order_id: receipt.order_id,
            user_name: receipt.user_name.clone(),
        }
    }

    /// Total with two decimals and the euro sign.
    pub fn formatted_total(&self) -> String {
        format!("€{:.2}", self.total_amount.round_dp(2))
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order Placed Successfully!")?;
        writeln!(f, "Ordered Items: {}", self.item_names.join(", "))?;
        writeln!(f, "Total Amount: {}", self.formatted_total())?;
        write!(f, "Order ID: {}", self.order_id)?;
        if let Some(name) = &self.user_name {
            write!(f, "\nName: {name}")?;
        }
        Ok(())
    }
}
