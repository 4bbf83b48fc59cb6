//! Property-based tests for cart invariants.
//!
//! Uses proptest to check that quantity merging, bounds, and totals hold
//! across arbitrary operation sequences, not just the handful of cases the
//! unit tests pin down.

use farmgate_commerce::cart::{Cart, MAX_QUANTITY_PER_ITEM};
use farmgate_commerce::catalog::{Product, Season};
use farmgate_commerce::ids::ProductId;
use farmgate_commerce::money::{Currency, Money};
use proptest::prelude::*;

fn product(id: i64, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        name_ar: String::new(),
        description: String::new(),
        description_ar: String::new(),
        price: Money::new(price_cents, Currency::EGP),
        image_url: None,
        unit: "kg".to_string(),
        active: true,
        season: Season::Current,
    }
}

/// Strategy for a price in whole piastres, kept small enough that no
/// realistic cart can overflow.
fn price_strategy() -> impl Strategy<Value = i64> {
    1i64..=1_000_000
}

proptest! {
    /// Repeatedly adding one product keeps a single line whose quantity is
    /// the sum of the accepted increments, never above the cap.
    #[test]
    fn repeated_adds_merge_into_one_bounded_line(
        price in price_strategy(),
        quantities in prop::collection::vec(1i64..=12, 1..20),
    ) {
        let mut cart = Cart::new();
        let mangoes = product(1, price);
        let mut accepted = 0i64;

        for quantity in quantities {
            if cart.add_item(&mangoes, quantity).is_ok() {
                accepted += quantity;
            }
        }

        prop_assert!(cart.unique_item_count() <= 1);
        let line_quantity = cart.line(ProductId::new(1)).map_or(0, |l| l.quantity);
        prop_assert_eq!(line_quantity, accepted);
        prop_assert!(line_quantity <= MAX_QUANTITY_PER_ITEM);
    }

    /// The subtotal always equals the sum over lines of price * quantity.
    #[test]
    fn subtotal_matches_line_arithmetic(
        lines in prop::collection::vec((1i64..=50, price_strategy(), 1i64..=MAX_QUANTITY_PER_ITEM), 0..8),
    ) {
        let mut cart = Cart::new();
        for (id, price, quantity) in &lines {
            // Duplicate ids may push a line past the cap; rejected adds
            // simply do not contribute.
            let _ = cart.add_item(&product(*id, *price), *quantity);
        }

        let expected: i64 = cart
            .items()
            .iter()
            .map(|l| l.unit_price.amount_cents * l.quantity)
            .sum();
        prop_assert_eq!(cart.subtotal().unwrap().amount_cents, expected);
    }

    /// Adding a product and then removing it restores the previous subtotal.
    #[test]
    fn add_then_remove_is_inverse(
        base_price in price_strategy(),
        extra_price in price_strategy(),
        base_quantity in 1i64..=MAX_QUANTITY_PER_ITEM,
        extra_quantity in 1i64..=MAX_QUANTITY_PER_ITEM,
    ) {
        let mut cart = Cart::new();
        cart.add_item(&product(1, base_price), base_quantity).unwrap();
        let before = cart.subtotal().unwrap();

        cart.add_item(&product(2, extra_price), extra_quantity).unwrap();
        cart.remove_item(ProductId::new(2));

        prop_assert_eq!(cart.subtotal().unwrap(), before);
    }

    /// update_quantity either applies in full or leaves the line untouched.
    #[test]
    fn update_quantity_is_all_or_nothing(
        initial in 1i64..=MAX_QUANTITY_PER_ITEM,
        requested in -5i64..=20,
    ) {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), initial).unwrap();

        let result = cart.update_quantity(ProductId::new(1), requested);
        let quantity = cart.line(ProductId::new(1)).unwrap().quantity;
        if (1..=MAX_QUANTITY_PER_ITEM).contains(&requested) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(quantity, requested);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(quantity, initial);
        }
    }

    /// Clearing a cart always yields zero totals.
    #[test]
    fn clear_zeroes_everything(
        lines in prop::collection::vec((1i64..=50, price_strategy(), 1i64..=MAX_QUANTITY_PER_ITEM), 0..8),
    ) {
        let mut cart = Cart::new();
        for (id, price, quantity) in &lines {
            let _ = cart.add_item(&product(*id, *price), *quantity);
        }

        cart.clear();
        prop_assert!(cart.is_empty());
        prop_assert_eq!(cart.item_count(), 0);
        prop_assert_eq!(cart.subtotal().unwrap().amount_cents, 0);
    }
}
