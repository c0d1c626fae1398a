//! Whole-cart reductions

use services_common::{LineItem, Px};
use tracing::debug;

/// Sum of all line notionals in the cart.
#[must_use]
pub fn cart_total(items: &[LineItem]) -> Px {
    let ticks = items
        .iter()
        .map(|item| item.price.mul_qty(item.quantity))
        .sum();

    debug!(items = items.len(), total = %Px::from_i64(ticks), "Computed cart total");
    Px::from_i64(ticks)
}

/// Sum of line notionals restricted to items priced at or above the
/// threshold. The unit price is compared, not the line notional.
#[must_use]
pub fn premium_total(items: &[LineItem], threshold: Px) -> Px {
    let ticks = items
        .iter()
        .filter(|item| item.price >= threshold)
        .map(|item| item.price.mul_qty(item.quantity))
        .sum();

    Px::from_i64(ticks)
}
