use serde::{Deserialize, Serialize};

/// Upper bound of a promotion discount, in percent.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;

/// Discount campaign that products can take part in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    pub id: i32,
    pub description: String,
    /// Percentage in `0..=100`.
    pub discount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    pub description: String,
    pub discount: f64,
}

impl NewPromotion {
    pub fn new(description: impl Into<String>, discount: f64) -> Self {
        Self {
            description: description.into(),
            discount,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePromotion {
    pub description: Option<String>,
    pub discount: Option<f64>,
}

impl UpdatePromotion {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.discount.is_none()
    }
}
