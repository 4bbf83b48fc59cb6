//! Shopping cart module.
//!
//! Contains the cart, its line items, the persistent store that owns it,
//! and the checkout display totals.

mod cart;
mod store;
mod totals;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use store::{CartStore, SubscriptionId, CART_STORAGE_KEY};
pub use totals::{CartTotals, STANDARD_DELIVERY_FEE};
