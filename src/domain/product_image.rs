use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Largest accepted image upload, in kilobytes.
pub const MAX_IMAGE_SIZE_KB: usize = 4000;

/// Picture attached to a product. `image` is relative to the media root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub image: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductImage {
    pub product_id: i32,
    pub image: String,
}

impl NewProductImage {
    pub fn new(product_id: i32, image: impl Into<String>) -> Self {
        Self {
            product_id,
            image: image.into(),
        }
    }
}
