//! Comprehensive tests for order stock screening

use cart_analytics::all_in_stock;
use pretty_assertions::assert_eq;
use rstest::*;
use services_common::{ProductOrder, Qty};
use test_utils::{OrderFactory, pending_orders};

#[rstest]
fn test_pending_orders_have_a_shortage(pending_orders: Vec<ProductOrder>) {
    assert_eq!(all_in_stock(&pending_orders), false);
}

#[rstest]
fn test_restocking_clears_the_shortage(mut pending_orders: Vec<ProductOrder>) {
    pending_orders[2].in_stock = Qty::from_units(5);
    assert_eq!(all_in_stock(&pending_orders), true);
}

#[rstest]
#[case(2, 2, true)]
#[case(2, 3, true)]
#[case(3, 2, false)]
#[case(1, 0, false)]
#[case(0, 0, true)]
fn test_single_line_coverage(
    #[case] ordered_units: i64,
    #[case] stocked_units: i64,
    #[case] expected: bool,
) {
    let orders = vec![ProductOrder::new(
        "Widget",
        Qty::from_units(ordered_units),
        Qty::from_units(stocked_units),
    )];
    assert_eq!(all_in_stock(&orders), expected);
}

#[test]
fn test_empty_order_list_is_fulfillable() {
    assert!(all_in_stock(&[]));
}

#[test]
fn test_factory_built_orders() {
    assert!(all_in_stock(&OrderFactory::build_covered(20)));
    assert!(!all_in_stock(&OrderFactory::build_with_shortage(20)));
}

#[test]
fn test_fractional_quantities_compare_exactly() {
    // 1.5 ordered against 1.4999 stocked
    let orders = vec![ProductOrder::new(
        "Cable",
        Qty::from_i64(15_000),
        Qty::from_i64(14_999),
    )];
    assert!(!all_in_stock(&orders));
}
