//! Order fulfillment stock screening

use services_common::ProductOrder;
use tracing::debug;

/// True iff every order line is covered by stock on hand.
///
/// Short-circuits on the first uncovered line. An empty order list is
/// vacuously fulfillable.
#[must_use]
pub fn all_in_stock(orders: &[ProductOrder]) -> bool {
    let fulfillable = orders.iter().all(ProductOrder::is_covered);
    debug!(lines = orders.len(), fulfillable, "Screened order stock");
    fulfillable
}
