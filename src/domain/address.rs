use serde::{Deserialize, Serialize};

/// Delivery address owned by a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub id: i32,
    pub customer_id: i32,
    pub street: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub customer_id: i32,
    pub street: String,
    pub city: String,
}

impl NewAddress {
    pub fn new(customer_id: i32, street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            customer_id,
            street: street.into(),
            city: city.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAddress {
    pub street: Option<String>,
    pub city: Option<String>,
}

impl UpdateAddress {
    pub fn is_empty(&self) -> bool {
        self.street.is_none() && self.city.is_none()
    }
}
