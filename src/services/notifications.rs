//! Post-commit fan-out of order events.
//!
//! Listeners run after the checkout transaction has committed. A listener that
//! fails or panics is logged and skipped; it never fails the checkout.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use thiserror::Error;

use crate::domain::order::Order;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ListenerError(pub String);

/// Receives every order created by a successful checkout.
pub trait OrderCreatedListener: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    fn on_order_created(&self, order: &Order) -> Result<(), ListenerError>;
}

/// Ordered collection of order-created listeners shared across workers.
#[derive(Clone, Default)]
pub struct OrderNotifier {
    listeners: Vec<Arc<dyn OrderCreatedListener>>,
}

impl OrderNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(mut self, listener: Arc<dyn OrderCreatedListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `order` to every listener; returns how many succeeded.
    pub fn notify_order_created(&self, order: &Order) -> usize {
        let mut delivered = 0;

        for listener in &self.listeners {
            let outcome = catch_unwind(AssertUnwindSafe(|| listener.on_order_created(order)));
            match outcome {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(err)) => {
                    log::error!(
                        "Order listener {} failed for order {}: {err}",
                        listener.name(),
                        order.id
                    );
                }
                Err(_) => {
                    log::error!(
                        "Order listener {} panicked for order {}",
                        listener.name(),
                        order.id
                    );
                }
            }
        }

        delivered
    }
}

/// Writes a log line for every placed order.
pub struct LoggingOrderListener;

impl OrderCreatedListener for LoggingOrderListener {
    fn name(&self) -> &str {
        "logging"
    }

    fn on_order_created(&self, order: &Order) -> Result<(), ListenerError> {
        log::info!(
            "Order {} placed by customer {} with {} item(s), total {} cents",
            order.id,
            order.customer_id,
            order.items.len(),
            order.total_cents()
        );
        Ok(())
    }
}
