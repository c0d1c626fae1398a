//! Custom assertions for testing

use services_common::{CategoryTotal, LineItem, Px};

/// Assert that the category totals conserve the cart total: the sum of
/// the output totals must equal the sum of the input line notionals.
pub fn assert_conservation(items: &[LineItem], totals: &[CategoryTotal]) {
    let input_sum: i64 = items
        .iter()
        .map(|item| item.price.mul_qty(item.quantity))
        .sum();
    let output_sum: i64 = totals.iter().map(|t| t.total.as_i64()).sum();

    assert_eq!(
        input_sum,
        output_sum,
        "Category totals do not conserve the cart total: input {} != output {}",
        Px::from_i64(input_sum),
        Px::from_i64(output_sum)
    );
}

/// Assert that the totals list one entry per distinct input category,
/// in the order each category first appears in the input.
pub fn assert_first_seen_order(items: &[LineItem], totals: &[CategoryTotal]) {
    let mut expected = Vec::new();
    for item in items {
        if !expected.contains(&item.category) {
            expected.push(item.category);
        }
    }

    let actual: Vec<_> = totals.iter().map(|t| t.category).collect();
    assert_eq!(
        expected, actual,
        "Category totals are not in first-seen order"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use services_common::{Category, Qty};

    #[test]
    fn test_conservation_holds_for_simple_cart() {
        let items = vec![LineItem::new(
            "Book",
            Px::from_units(20),
            Qty::from_units(4),
            Category::Books,
        )];
        let totals = vec![CategoryTotal {
            category: Category::Books,
            total: Px::from_units(80),
        }];
        assert_conservation(&items, &totals);
        assert_first_seen_order(&items, &totals);
    }

    #[test]
    #[should_panic(expected = "conserve")]
    fn test_conservation_catches_lost_value() {
        let items = vec![LineItem::new(
            "Book",
            Px::from_units(20),
            Qty::from_units(4),
            Category::Books,
        )];
        let totals = vec![CategoryTotal {
            category: Category::Books,
            total: Px::from_units(79),
        }];
        assert_conservation(&items, &totals);
    }
}
