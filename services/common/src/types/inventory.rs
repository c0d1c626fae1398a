//! Inventory types for stock screening

use crate::types::money::Qty;
use serde::{Deserialize, Serialize};

/// One order line checked against warehouse stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOrder {
    /// Product display name
    pub name: String,

    /// Units the customer ordered
    pub ordered: Qty,

    /// Units currently in stock
    pub in_stock: Qty,
}

impl ProductOrder {
    /// Create a new order line
    #[must_use]
    pub fn new(name: impl Into<String>, ordered: Qty, in_stock: Qty) -> Self {
        Self {
            name: name.into(),
            ordered,
            in_stock,
        }
    }

    /// Whether stock on hand covers the ordered quantity
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.in_stock >= self.ordered
    }
}
