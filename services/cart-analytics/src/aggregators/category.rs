//! Per-category total aggregation

use services_common::constants::capacity::CATEGORY_ACCUMULATOR;
use services_common::{CategoryTotal, LineItem, Px};
use tracing::debug;

/// Aggregate line notionals per category in a single pass.
///
/// Output entries appear in the order each category is first seen in the
/// input; the order is never sorted afterwards. An empty cart yields an
/// empty vector. Categories are a closed enum, so the accumulator is a
/// small vector scanned linearly rather than a hash map.
#[must_use]
pub fn totals_by_category(items: &[LineItem]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::with_capacity(CATEGORY_ACCUMULATOR);

    for item in items {
        let notional = item.notional();
        match totals.iter_mut().find(|t| t.category == item.category) {
            Some(entry) => entry.total = entry.total.add(notional),
            None => totals.push(CategoryTotal {
                category: item.category,
                total: notional,
            }),
        }
    }

    debug!(
        items = items.len(),
        categories = totals.len(),
        "Aggregated cart by category"
    );
    totals
}
