//! The cart line item wire/domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// One purchasable line entry in the cart.
///
/// Mirrors the shape the remote catalog serves: a JSON array of objects with
/// at least `id`, `title`, `price`, `amount` and an image URL. The catalog
/// encodes `price` as a decimal string (`"399.99"`); `rust_decimal` accepts
/// both string and numeric encodings on the way in.
///
/// Fields this type does not model are carried in [`extra`](Self::extra)
/// and pass through re-serialization unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog record id; unique within a cart.
    pub id: ItemId,
    /// Display title.
    pub title: String,
    /// Unit price; non-negative.
    pub price: Decimal,
    /// Quantity in the cart. A zero-amount line stays in the cart and
    /// still renders; lines are only removed explicitly.
    pub amount: u32,
    /// Image URL, passed through unchanged.
    pub img: Option<String>,
    /// Any remote fields not modeled above, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CartItem {
    /// The total for this line: `amount * price`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.amount) * self.price
    }
}
