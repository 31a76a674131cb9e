use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::cart::{MAX_CART_ITEM_QUANTITY, NewCartItem};

pub type CartFormResult<T> = Result<T, CartFormError>;

#[derive(Debug, Error)]
pub enum CartFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Parses a cart id into the hyphenated lowercase form used as the primary
/// key. Returns `None` for anything that is not a UUID.
pub fn normalize_cart_id(input: &str) -> Option<String> {
    Uuid::parse_str(input.trim())
        .ok()
        .map(|id| id.hyphenated().to_string())
}

/// Payload for `POST /carts/{cart_id}/items`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCartItemForm {
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1, max = MAX_CART_ITEM_QUANTITY))]
    pub quantity: i32,
}

impl AddCartItemForm {
    pub fn into_new_cart_item(self, cart_id: &str) -> CartFormResult<NewCartItem> {
        self.validate()?;
        Ok(NewCartItem::new(cart_id, self.product_id, self.quantity))
    }
}

/// Payload for `PATCH /carts/{cart_id}/items/{item_id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCartItemForm {
    #[validate(range(min = 1, max = MAX_CART_ITEM_QUANTITY))]
    pub quantity: i32,
}

impl UpdateCartItemForm {
    pub fn into_quantity(self) -> CartFormResult<i32> {
        self.validate()?;
        Ok(self.quantity)
    }
}
