//! Display totals for the checkout summary.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat delivery fee shown in the order summary.
///
/// Display only. The server owns canonical order pricing and recomputes
/// every total from the submitted product ids and quantities.
pub const STANDARD_DELIVERY_FEE: Money = Money::new(2000, Currency::EGP);

/// Price breakdown rendered on the checkout screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals before delivery.
    pub subtotal: Money,
    /// Delivery fee.
    pub delivery: Money,
    /// Subtotal plus delivery.
    pub grand_total: Money,
}

impl Cart {
    /// Compute the display breakdown for this cart.
    pub fn totals(&self, delivery: Money) -> Result<CartTotals, CommerceError> {
        let subtotal = self.subtotal()?;
        let grand_total = subtotal
            .try_add(&delivery)
            .ok_or(CommerceError::CurrencyMismatch {
                expected: subtotal.currency.code().to_string(),
                got: delivery.currency.code().to_string(),
            })?;
        Ok(CartTotals {
            subtotal,
            delivery,
            grand_total,
        })
    }
}
