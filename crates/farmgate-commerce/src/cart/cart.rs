//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 10;

/// A line item in the cart.
///
/// Carries a snapshot of the product taken at add time; later catalog
/// price changes do not touch carts already holding the product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Product image (denormalized for display).
    pub image_url: Option<String>,
    /// Sale unit (e.g. "kg", "box").
    pub unit: String,
    /// Unit price snapshot taken at add time.
    pub unit_price: Money,
    /// Quantity, always in `1..=MAX_QUANTITY_PER_ITEM`.
    pub quantity: i64,
}

impl LineItem {
    /// Snapshot a product into a new line item.
    fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            unit: product.unit.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Total price for this line (`unit_price * quantity`).
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// The in-progress order contents.
///
/// Line items keep insertion order, which is also display order, and the
/// cart holds at most one line per distinct product. All mutation goes
/// through methods that uphold both invariants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub(crate) items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously persisted line items.
    pub(crate) fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Add a product to the cart.
    ///
    /// If a line item for the product already exists, its quantity is
    /// incremented. An increment that would push the line past
    /// `MAX_QUANTITY_PER_ITEM` is rejected outright, leaving the existing
    /// quantity unchanged.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let cart_currency = self.currency();
        if product.price.currency != cart_currency && !self.items.is_empty() {
            return Err(CommerceError::CurrencyMismatch {
                expected: cart_currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(LineItem::from_product(product, quantity));
        Ok(())
    }

    /// Replace the quantity of an existing line item.
    ///
    /// A quantity below one is rejected, leaving the item unchanged:
    /// removal is an explicit action, never a side effect of a quantity
    /// edit.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove the line item for a product.
    ///
    /// Removing a product that is not in the cart is a no-op, not an error.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line item for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The currency the cart trades in.
    ///
    /// All line items share one currency; an empty cart reports the
    /// storefront default.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or_default()
    }

    /// Sum of `unit_price * quantity` over all line items.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let currency = self.currency();
        let mut total = Money::zero(currency);
        for item in &self.items {
            let line = item.line_total()?;
            total = total.try_add(&line).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Season;

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

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 2).unwrap();
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_product_merges_line() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 1).unwrap();
        cart.add_item(&product(1, 4500), 2).unwrap();
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 3);
    }

    #[test]
    fn test_add_beyond_limit_is_rejected_not_clamped() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 8).unwrap();
        let err = cart.add_item(&product(1, 4500), 5).unwrap_err();
        assert_eq!(
            err,
            CommerceError::QuantityExceedsLimit(13, MAX_QUANTITY_PER_ITEM)
        );
        // The rejected increment left the line untouched.
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 8);
    }

    #[test]
    fn test_add_zero_quantity_is_rejected() {
        let mut cart = Cart::new();
        let err = cart.add_item(&product(1, 4500), 0).unwrap_err();
        assert_eq!(err, CommerceError::InvalidQuantity(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_price_snapshot_taken_at_add_time() {
        let mut cart = Cart::new();
        let mut mangoes = product(1, 4500);
        cart.add_item(&mangoes, 1).unwrap();
        mangoes.price = Money::new(9900, Currency::EGP);
        assert_eq!(
            cart.line(ProductId::new(1)).unwrap().unit_price,
            Money::new(4500, Currency::EGP)
        );
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 1).unwrap();
        cart.update_quantity(ProductId::new(1), 5).unwrap();
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_to_zero_is_rejected() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 3).unwrap();
        let err = cart.update_quantity(ProductId::new(1), 0).unwrap_err();
        assert_eq!(err, CommerceError::InvalidQuantity(0));
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 3);
    }

    #[test]
    fn test_update_quantity_for_missing_item() {
        let mut cart = Cart::new();
        let err = cart.update_quantity(ProductId::new(9), 2).unwrap_err();
        assert_eq!(err, CommerceError::ItemNotInCart(ProductId::new(9)));
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 1).unwrap();
        assert!(cart.remove_item(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.remove_item(ProductId::new(9)));
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 2).unwrap();
        cart.add_item(&product(2, 2000), 1).unwrap();
        assert_eq!(cart.subtotal().unwrap(), Money::new(11000, Currency::EGP));

        cart.remove_item(ProductId::new(1));
        assert_eq!(cart.subtotal().unwrap(), Money::new(2000, Currency::EGP));
    }

    #[test]
    fn test_add_then_remove_restores_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 2).unwrap();
        let before = cart.subtotal().unwrap();
        cart.add_item(&product(2, 2000), 3).unwrap();
        cart.remove_item(ProductId::new(2));
        assert_eq!(cart.subtotal().unwrap(), before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 2).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().unwrap(), Money::zero(Currency::EGP));
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_mixed_currency_is_rejected() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 4500), 1).unwrap();
        let mut imported = product(2, 999);
        imported.price = Money::new(999, Currency::USD);
        let err = cart.add_item(&imported, 1).unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(&product(3, 100), 1).unwrap();
        cart.add_item(&product(1, 100), 1).unwrap();
        cart.add_item(&product(2, 100), 1).unwrap();
        let ids: Vec<i64> = cart.items().iter().map(|i| i.product_id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
