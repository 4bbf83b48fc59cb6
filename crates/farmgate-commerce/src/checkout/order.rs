//! Order submission payload and result types.

use crate::cart::Cart;
use crate::checkout::DeliveryForm;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product-quantity pair in the outbound payload.
///
/// Prices are deliberately absent: the server recomputes canonical pricing
/// from its own catalog, and client-side prices exist for display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Quantity ordered.
    pub quantity: i64,
}

/// Delivery address as the order API expects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryAddress {
    /// City.
    pub city: String,
    /// Street address.
    pub street: String,
    /// Building, apartment, floor. May be empty.
    pub building: String,
}

/// Customer block of the outbound payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerInfo {
    /// Customer name.
    pub name: String,
    /// Customer mobile number in canonical local form.
    pub phone: String,
    /// Delivery address.
    pub address: DeliveryAddress,
}

/// The payload sent to the order-creation API.
///
/// Derived from the cart and the validated delivery form on every submit
/// attempt; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSubmission {
    /// Customer and delivery details.
    pub customer: CustomerInfo,
    /// Ordered items.
    pub items: Vec<OrderItem>,
    /// Free-form delivery notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderSubmission {
    /// Build the payload from the current cart and a validated form.
    pub fn build(cart: &Cart, form: &DeliveryForm) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id,
                quantity: line.quantity,
            })
            .collect();

        let notes = {
            let notes = form.notes.trim();
            (!notes.is_empty()).then(|| notes.to_string())
        };

        Self {
            customer: CustomerInfo {
                name: form.name.trim().to_string(),
                phone: form.normalized_phone(),
                address: DeliveryAddress {
                    city: form.city.trim().to_string(),
                    street: form.address_line1.trim().to_string(),
                    building: form.address_line2.trim().to_string(),
                },
            },
            items,
            notes,
        }
    }
}

/// The confirmed order as reported back by the order API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResult {
    /// Order reference shown on the confirmation screen.
    pub reference: String,
    /// Canonical total computed by the server.
    pub total: Money,
}
