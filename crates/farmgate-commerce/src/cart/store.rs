//! Cart store: the single source of truth for the in-progress order.
//!
//! Wraps a [`Cart`] with durable persistence and change notification. The
//! catalog UI mutates it, the checkout flow reads it (and clears it after a
//! placed order); subscribers hear about every committed mutation.

use crate::cart::{Cart, CartTotals, LineItem};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use farmgate_store::{Storage, StorageExt};
use serde::{Deserialize, Serialize};

/// Storage key for the persisted cart record.
pub const CART_STORAGE_KEY: &str = "farmgate.cart";

/// Schema version of the persisted cart record.
///
/// Bump on layout changes; a record with an unknown version is discarded
/// rather than misread.
const CART_SCHEMA_VERSION: u32 = 1;

/// On-disk shape of the cart record.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedCart {
    schema: u32,
    items: Vec<LineItem>,
}

/// Handle to an active cart subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Cart)>;

/// The cart store.
///
/// Mutations apply to the in-memory cart first, then persist, then notify
/// subscribers. Persistence is best effort: a write failure is logged and
/// swallowed, because losing a cart on reload is recoverable while crashing
/// the storefront is not.
pub struct CartStore<S: Storage> {
    cart: Cart,
    storage: S,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: Storage> CartStore<S> {
    /// Open the store, restoring any cart persisted on this device.
    ///
    /// A missing, corrupt, or version-mismatched record yields an empty
    /// cart, never an error.
    pub fn open(storage: S) -> Self {
        let cart = match storage.get_json::<PersistedCart>(CART_STORAGE_KEY) {
            Ok(Some(record)) if record.schema == CART_SCHEMA_VERSION => {
                Cart::from_items(record.items)
            }
            Ok(Some(record)) => {
                tracing::warn!(schema = record.schema, "discarding cart record with unknown schema");
                Cart::new()
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable cart record");
                Cart::new()
            }
        };
        Self {
            cart,
            storage,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Read access to the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a product to the cart and persist.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        self.cart.add_item(product, quantity)?;
        self.commit();
        Ok(())
    }

    /// Replace a line item's quantity and persist.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        self.cart.update_quantity(product_id, quantity)?;
        self.commit();
        Ok(())
    }

    /// Remove a line item and persist. No-op when the product is absent.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        if removed {
            self.commit();
        }
        removed
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.commit();
    }

    /// Sum of `unit_price * quantity` over all line items.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.cart.subtotal()
    }

    /// Total item count, for UI badges.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Display breakdown for the checkout summary.
    pub fn totals(&self, delivery: Money) -> Result<CartTotals, CommerceError> {
        self.cart.totals(delivery)
    }

    /// Subscribe to cart changes.
    ///
    /// The listener runs after every committed mutation, with the cart
    /// already in its new state.
    pub fn subscribe(&mut self, listener: impl FnMut(&Cart) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a subscription. Returns false when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < len_before
    }

    /// Persist the cart and notify subscribers.
    fn commit(&mut self) {
        let record = PersistedCart {
            schema: CART_SCHEMA_VERSION,
            items: self.cart.items.clone(),
        };
        if let Err(e) = self.storage.set_json(CART_STORAGE_KEY, &record) {
            tracing::warn!(error = %e, "cart persistence failed; keeping in-memory state");
        }
        for (_, listener) in &mut self.listeners {
            listener(&self.cart);
        }
    }
}
