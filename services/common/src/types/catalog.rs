//! Catalog types for cart line items and category aggregates

use crate::errors::CommerceError;
use crate::types::money::{Px, Qty};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Electronics products
    Electronics,
    /// Books and printed media
    Books,
    /// Stationery and office supplies
    Stationery,
}

impl Category {
    /// All categories, in declaration order
    pub const ALL: [Self; 3] = [Self::Electronics, Self::Books, Self::Stationery];

    /// Category name as a static string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Books => "Books",
            Self::Stationery => "Stationery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Electronics" => Ok(Self::Electronics),
            "Books" => Ok(Self::Books),
            "Stationery" => Ok(Self::Stationery),
            other => Err(CommerceError::UnknownCategory(other.to_string())),
        }
    }
}

/// A single cart line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product display name
    pub name: String,

    /// Unit price
    pub price: Px,

    /// Units in the cart
    pub quantity: Qty,

    /// Product category
    pub category: Category,
}

impl LineItem {
    /// Create a new line item
    #[must_use]
    pub fn new(name: impl Into<String>, price: Px, quantity: Qty, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            category,
        }
    }

    /// Notional value of the line (price times quantity)
    #[must_use]
    pub const fn notional(&self) -> Px {
        Px::from_i64(self.price.mul_qty(self.quantity))
    }
}

/// Accumulated total for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category the total belongs to
    pub category: Category,

    /// Sum of line notionals in this category
    pub total: Px,
}
