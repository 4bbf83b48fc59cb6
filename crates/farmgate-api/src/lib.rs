//! Typed backend services for Farmgate.
//!
//! One service per backend concern, all sharing the configured
//! [`FetchClient`](farmgate_data::FetchClient):
//!
//! - **Products**: catalog listings, single products, coming harvests
//! - **Orders**: order creation (the checkout [`OrderGateway`] lives here)
//!   and lookup
//! - **Auth**: login, logout, refresh, current user
//!
//! Every failure is normalized into [`ApiError`]; the checkout-facing side
//! converts to the commerce `GatewayError` so the flow state machine never
//! sees transport details.
//!
//! [`OrderGateway`]: farmgate_commerce::checkout::OrderGateway
//!
//! # Example
//!
//! ```rust,ignore
//! use farmgate_api::{ApiConfig, OrdersService, ProductsService, ProductQuery};
//!
//! let config = ApiConfig::from_env();
//! let products = ProductsService::new(config.client(transport.clone()));
//! let orders = OrdersService::new(config.client(transport));
//!
//! let page = products.list(&ProductQuery::active_only())?;
//! ```

mod auth;
mod config;
mod envelope;
mod error;
mod orders;
mod products;

#[cfg(test)]
mod testing;

pub use auth::{AuthService, LoginSession};
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use envelope::{
    extract_error_message, ApiEnvelope, ListEnvelope, PageMeta, GENERIC_ERROR_MESSAGE,
};
pub use error::ApiError;
pub use orders::OrdersService;
pub use products::{ProductPage, ProductQuery, ProductsService};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiConfig, ApiError, AuthService, LoginSession, OrdersService, PageMeta, ProductPage,
        ProductQuery, ProductsService,
    };
}
