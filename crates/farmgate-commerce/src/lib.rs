//! Storefront domain types and logic for Farmgate.
//!
//! This crate provides the core of a farm-to-consumer storefront:
//!
//! - **Catalog**: read-only product data sourced from the backend
//! - **Cart**: line items with quantity merging, a persistent observable
//!   store, and exact-money totals
//! - **Checkout**: delivery form validation and the submission state machine
//!
//! # Example
//!
//! ```rust,ignore
//! use farmgate_commerce::prelude::*;
//! use farmgate_store::MemoryStorage;
//!
//! // Open the cart store and add a product fetched from the catalog.
//! let mut store = CartStore::open(MemoryStorage::new());
//! store.add_item(&mangoes, 2)?;
//!
//! // Fill in the delivery form and place the order.
//! let mut flow = CheckoutFlow::new();
//! flow.form_mut().name = "Omar Hassan".into();
//! flow.form_mut().phone = "01012345678".into();
//! flow.form_mut().address_line1 = "14 Orchard Road".into();
//! flow.form_mut().city = "Cairo".into();
//!
//! match flow.submit(&mut store, &orders, &GuestCheckout) {
//!     SubmitOutcome::Placed(result) => println!("total: {}", result.total),
//!     other => println!("not placed: {other:?}"),
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, Season};

    // Cart
    pub use crate::cart::{
        Cart, CartStore, CartTotals, LineItem, MAX_QUANTITY_PER_ITEM, STANDARD_DELIVERY_FEE,
    };

    // Checkout
    pub use crate::checkout::{
        AuthGate, CheckoutFlow, CheckoutState, DeliveryForm, Field, FieldError, GatewayError,
        GuestCheckout, OrderGateway, OrderItem, OrderResult, OrderSubmission, SubmitBlock,
        SubmitOutcome,
    };
}
