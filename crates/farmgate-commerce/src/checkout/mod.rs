//! Checkout module.
//!
//! Contains the delivery form with its validation, the order payload and
//! result types, and the checkout flow state machine.

mod flow;
mod form;
mod order;

pub use flow::{
    AuthGate, CheckoutFlow, CheckoutState, GatewayError, GuestCheckout, OrderGateway,
    SubmitBlock, SubmitOutcome, NETWORK_ERROR_MESSAGE,
};
pub use form::{DeliveryForm, Field, FieldError};
pub use order::{CustomerInfo, DeliveryAddress, OrderItem, OrderResult, OrderSubmission};
