use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::money;

/// Largest quantity a single cart line may hold.
pub const MAX_CART_ITEM_QUANTITY: i32 = 32767;

/// Anonymous shopping cart keyed by a random UUID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    /// Hyphenated lowercase UUID.
    pub id: String,
    pub created_at: NaiveDateTime,
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn total_price_cents(&self) -> i64 {
        money::sum_totals(self.items.iter().map(CartItem::total_price_cents))
    }
}

/// Product fields shown alongside a cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartProduct {
    pub id: i32,
    pub title: String,
    pub unit_price_cents: i64,
}

/// A product and quantity inside a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub id: i32,
    pub cart_id: String,
    pub product: CartProduct,
    pub quantity: i32,
}

impl CartItem {
    /// Line total at the product's current price.
    pub fn total_price_cents(&self) -> i64 {
        money::line_total(self.quantity, self.product.unit_price_cents)
    }
}

/// Payload for a freshly generated cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub id: String,
}

impl Default for NewCart {
    fn default() -> Self {
        Self::new()
    }
}

impl NewCart {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
        }
    }
}

/// Request to put `quantity` units of a product into a cart. When the cart
/// already holds the product the quantities are summed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub cart_id: String,
    pub product_id: i32,
    pub quantity: i32,
}

impl NewCartItem {
    pub fn new(cart_id: impl Into<String>, product_id: i32, quantity: i32) -> Self {
        Self {
            cart_id: cart_id.into(),
            product_id,
            quantity,
        }
    }
}
