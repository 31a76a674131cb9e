use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::money;
use crate::pagination::Pagination;

/// Payment state of an order. The only field that changes after checkout.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Order has been placed and awaits payment.
    #[default]
    Pending,
    /// Payment has been received.
    Complete,
    /// Payment was attempted and failed.
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Complete => "complete",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl From<PaymentStatus> for &'static str {
    fn from(value: PaymentStatus) -> Self {
        value.as_str()
    }
}

impl From<&str> for PaymentStatus {
    /// Unknown values fall back to [`PaymentStatus::Pending`].
    fn from(value: &str) -> Self {
        match value {
            "complete" => PaymentStatus::Complete,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Pending,
        }
    }
}

/// Immutable record of a completed checkout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub placed_at: NaiveDateTime,
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn total_cents(&self) -> i64 {
        money::sum_totals(self.items.iter().map(OrderItem::total_cents))
    }
}

/// Order line with the unit price captured at checkout time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: i32,
    pub product_id: i32,
    pub product_title: String,
    /// Price snapshot; later product price changes do not affect it.
    pub unit_price_cents: i64,
    pub quantity: i32,
}

impl OrderItem {
    pub fn total_cents(&self) -> i64 {
        money::line_total(self.quantity, self.unit_price_cents)
    }
}

/// Input of the checkout transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    /// Cart being converted; deleted on success.
    pub cart_id: String,
    /// User whose customer profile will own the order.
    pub user_id: i32,
    pub placed_at: NaiveDateTime,
}

impl Checkout {
    pub fn new(cart_id: impl Into<String>, user_id: i32) -> Self {
        Self {
            cart_id: cart_id.into(),
            user_id,
            placed_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when updating an existing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrder {
    pub payment_status: PaymentStatus,
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Restrict to a single customer's orders.
    pub customer_id: Option<i32>,
    pub payment_status: Option<PaymentStatus>,
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
