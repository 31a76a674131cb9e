use serde::Deserialize;
use thiserror::Error;
use crate::domain::order::{Checkout, PaymentStatus, UpdateOrder};
use crate::forms::carts::normalize_cart_id;

pub type OrderFormResult<T> = Result<T, OrderFormError>;

#[derive(Debug, Error)]
pub enum OrderFormError {
    #[error("`{0}` is not a valid cart id")]
    InvalidCartId(String),
    #[error("unknown payment status `{0}`")]
    InvalidPaymentStatus(String),
}

/// Payload for `POST /orders`.
#[derive(Debug, Deserialize)]
pub struct CreateOrderForm {
    pub cart_id: String,
}

impl CreateOrderForm {
    /// Cart ids must be UUIDs; they are normalised to the hyphenated
    /// lowercase form used as the primary key.
    pub fn into_checkout(self, user_id: i32) -> OrderFormResult<Checkout> {
        let cart_id = normalize_cart_id(&self.cart_id)
            .ok_or_else(|| OrderFormError::InvalidCartId(self.cart_id.clone()))?;

        Ok(Checkout::new(cart_id, user_id))
    }
}

/// Payload for `PATCH /orders/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderForm {
    pub payment_status: String,
}

impl UpdateOrderForm {
    pub fn into_update_order(self) -> OrderFormResult<UpdateOrder> {
        let payment_status = parse_payment_status(&self.payment_status)
            .ok_or(OrderFormError::InvalidPaymentStatus(self.payment_status))?;

        Ok(UpdateOrder { payment_status })
    }
}

/// Strict parse: accepts the status names and their single-letter codes.
pub fn parse_payment_status(input: &str) -> Option<PaymentStatus> {
    match input.trim().to_ascii_lowercase().as_str() {
        "pending" | "p" => Some(PaymentStatus::Pending),
        "complete" | "c" => Some(PaymentStatus::Complete),
        "failed" | "f" => Some(PaymentStatus::Failed),
        _ => None,
    }
}
