//! Aggregator implementations

pub mod category;
pub mod totals;

pub use category::totals_by_category;
pub use totals::{cart_total, premium_total};
