//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Availability season for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// In season and purchasable now.
    #[default]
    Current,
    /// Announced for a coming harvest; browsable but not purchasable.
    Upcoming,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Current => "current",
            Season::Upcoming => "upcoming",
        }
    }
}

/// A farm product as served by the catalog backend.
///
/// Immutable once fetched; the cart snapshots the fields it needs at
/// add time rather than holding a reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Arabic product name.
    pub name_ar: String,
    /// Product description.
    pub description: String,
    /// Arabic product description.
    pub description_ar: String,
    /// Unit price.
    pub price: Money,
    /// Image URL, if the product has one.
    pub image_url: Option<String>,
    /// Sale unit (e.g. "kg", "box").
    pub unit: String,
    /// Whether the product is listed for sale.
    pub active: bool,
    /// Availability season.
    #[serde(default)]
    pub season: Season,
}

impl Product {
    /// Check whether the product can be added to a cart.
    pub fn is_orderable(&self) -> bool {
        self.active && self.season == Season::Current
    }
}
