//! Checkout flow state machine.
//!
//! Turns a non-empty cart plus a validated delivery form into a submitted
//! order, and tracks the linear state of the checkout screen:
//! `Editing -> Submitting -> Success | Failed`, with `Failed` returning to
//! `Editing` for a manual retry. There are no automatic retries.

use crate::cart::CartStore;
use crate::checkout::{DeliveryForm, Field, FieldError, OrderResult, OrderSubmission};
use farmgate_store::Storage;
use thiserror::Error;

/// Message shown when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// The order-creation collaborator.
///
/// Implemented over the live order API by the service layer and by scripted
/// fakes in tests. The call suspends the flow until a result is available;
/// exactly one call may be outstanding per checkout.
pub trait OrderGateway {
    /// Submit the order and return the server's confirmation.
    fn create_order(&self, submission: &OrderSubmission) -> Result<OrderResult, GatewayError>;
}

/// Failure reported by the order gateway.
///
/// Transport failures and server rejections are surfaced to the user the
/// same way, as one displayed message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No response was received.
    #[error("Request failed: {0}")]
    Network(String),

    /// The server rejected the order.
    #[error("Order rejected (HTTP {status}): {message}")]
    Rejected {
        /// HTTP status of the rejection.
        status: u16,
        /// Human-readable message extracted from the response body.
        message: String,
    },
}

impl GatewayError {
    /// The message to display on the checkout screen.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            GatewayError::Rejected { message, .. } => message.clone(),
        }
    }
}

/// Gate consulted before submission when the storefront requires login.
pub trait AuthGate {
    /// Whether the current visitor holds a live authenticated session.
    fn is_authenticated(&self) -> bool;
}

/// Gate for storefronts that allow guest checkout.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestCheckout;

impl AuthGate for GuestCheckout {
    fn is_authenticated(&self) -> bool {
        true
    }
}

/// State of the checkout screen.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    /// Form being edited; no submission attempted or last one retried.
    Editing,
    /// A submission is in flight.
    Submitting,
    /// The order was placed; terminal for this cart.
    Success(OrderResult),
    /// The last submission failed; the form and cart are intact.
    Failed(String),
}

/// Why a submit attempt never reached the network.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlock {
    /// A submission is already in flight.
    InFlight,
    /// The order was already placed.
    AlreadyPlaced,
    /// Login is required before checking out.
    AuthenticationRequired,
    /// The cart is empty.
    EmptyCart,
    /// The form failed validation.
    InvalidForm(Vec<FieldError>),
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The order was placed and the cart cleared.
    Placed(OrderResult),
    /// The gateway was invoked and refused; message is user-facing.
    Rejected(String),
    /// The attempt was stopped before any network call.
    Blocked(SubmitBlock),
}

/// The checkout orchestrator.
pub struct CheckoutFlow {
    form: DeliveryForm,
    field_errors: Vec<FieldError>,
    state: CheckoutState,
    auth_required: bool,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    /// Start a checkout in the editing state.
    pub fn new() -> Self {
        Self {
            form: DeliveryForm::default(),
            field_errors: Vec::new(),
            state: CheckoutState::Editing,
            auth_required: false,
        }
    }

    /// Require an authenticated session before submission.
    pub fn with_auth_required(mut self) -> Self {
        self.auth_required = true;
        self
    }

    /// Read access to the form.
    pub fn form(&self) -> &DeliveryForm {
        &self.form
    }

    /// Mutable access to the form for field edits.
    pub fn form_mut(&mut self) -> &mut DeliveryForm {
        &mut self.form
    }

    /// Current screen state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state(), CheckoutState::Submitting)
    }

    /// Field errors currently displayed.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// The displayed error for one field, if any.
    pub fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.field_errors.iter().find(|e| e.field == field)
    }

    /// Re-validate a single field, the on-blur hook.
    pub fn blur_field(&mut self, field: Field) {
        self.field_errors.retain(|e| e.field != field);
        if let Some(error) = self.form.validate_field(field) {
            self.field_errors.push(error);
        }
    }

    /// The failure banner message, when the last submission failed.
    pub fn error_message(&self) -> Option<&str> {
        match self.state() {
            CheckoutState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The placed order, once submission succeeded.
    pub fn order_result(&self) -> Option<&OrderResult> {
        match self.state() {
            CheckoutState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Return from `Failed` to `Editing`. False in any other state.
    pub fn retry(&mut self) -> bool {
        if matches!(self.state(), CheckoutState::Failed(_)) {
            self.state = CheckoutState::Editing;
            true
        } else {
            false
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit<S: Storage>(&self, store: &CartStore<S>) -> bool {
        !matches!(
            self.state(),
            CheckoutState::Submitting | CheckoutState::Success(_)
        ) && !store.is_empty()
            && self.form.is_valid()
    }

    /// Attempt to place the order.
    ///
    /// Guards run first and reject without a network call; a guarded
    /// attempt leaves the state unchanged. On success the cart store is
    /// cleared; on rejection the cart and form stay intact so the user can
    /// correct and resubmit.
    pub fn submit<S: Storage, G: OrderGateway>(
        &mut self,
        store: &mut CartStore<S>,
        gateway: &G,
        gate: &dyn AuthGate,
    ) -> SubmitOutcome {
        match self.state() {
            CheckoutState::Submitting => return SubmitOutcome::Blocked(SubmitBlock::InFlight),
            CheckoutState::Success(_) => {
                return SubmitOutcome::Blocked(SubmitBlock::AlreadyPlaced)
            }
            _ => {}
        }

        if self.auth_required && !gate.is_authenticated() {
            return SubmitOutcome::Blocked(SubmitBlock::AuthenticationRequired);
        }

        if store.is_empty() {
            return SubmitOutcome::Blocked(SubmitBlock::EmptyCart);
        }

        let errors = self.form.validate();
        if !errors.is_empty() {
            self.field_errors = errors.clone();
            return SubmitOutcome::Blocked(SubmitBlock::InvalidForm(errors));
        }
        self.field_errors.clear();

        self.state = CheckoutState::Submitting;
        let submission = OrderSubmission::build(store.cart(), &self.form);
        tracing::debug!(items = submission.items.len(), "submitting order");

        match gateway.create_order(&submission) {
            Ok(result) => {
                store.clear();
                tracing::info!(reference = %result.reference, "order placed");
                self.state = CheckoutState::Success(result.clone());
                SubmitOutcome::Placed(result)
            }
            Err(error) => {
                let message = error.user_message();
                tracing::warn!(error = %error, "order submission failed");
                self.state = CheckoutState::Failed(message.clone());
                SubmitOutcome::Rejected(message)
            }
        }
    }

    #[cfg(test)]
    fn force_state(&mut self, state: CheckoutState) {
        self.state = state;
    }
}
