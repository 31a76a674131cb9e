use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Group of products, optionally highlighting one featured product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    pub id: i32,
    pub title: String,
    pub featured_product_id: Option<i32>,
    /// Number of products in the collection, filled in by the repository.
    pub products_count: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCollection {
    pub title: String,
    pub featured_product_id: Option<i32>,
}

impl NewCollection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            featured_product_id: None,
        }
    }

    pub fn with_featured_product_id(mut self, product_id: i32) -> Self {
        self.featured_product_id = Some(product_id);
        self
    }
}

/// Patch data applied when updating an existing collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCollection {
    pub title: Option<String>,
    /// `Some(None)` clears the featured product.
    pub featured_product_id: Option<Option<i32>>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateCollection {
    pub fn new() -> Self {
        Self {
            title: None,
            featured_product_id: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn featured_product_id(mut self, product_id: Option<i32>) -> Self {
        self.featured_product_id = Some(product_id);
        self
    }
}
