use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Shopper review attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    /// Reviewer display name.
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
}

impl NewReview {
    /// Build a review dated today.
    pub fn new(product_id: i32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            product_id,
            name: name.into(),
            description: description.into(),
            date: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReview {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}
