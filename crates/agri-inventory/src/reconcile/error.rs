//! Errors surfaced by the reconciliation components.

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReconcileError {
    /// An order or product id does not resolve.
    #[error("{0}")]
    NotFound(String),

    /// Malformed status value or stock quantity.
    #[error("{0}")]
    Validation(String),

    /// A conditional counter write or status compare-and-set was refused.
    #[error("{0}")]
    Conflict(String),

    /// The store (an actor mailbox) could not be reached.
    #[error("{0}")]
    Persistence(String),
}

impl From<ProductError> for ReconcileError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ReconcileError::NotFound(e.to_string()),
            ProductError::CounterUnderflow { .. } => ReconcileError::Conflict(e.to_string()),
            ProductError::Invalid(_) => ReconcileError::Validation(e.to_string()),
            ProductError::ActorCommunicationError(_) => ReconcileError::Persistence(e.to_string()),
        }
    }
}

impl From<OrderError> for ReconcileError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ReconcileError::NotFound(e.to_string()),
            OrderError::ValidationError(_) => ReconcileError::Validation(e.to_string()),
            OrderError::NotPrebooked { .. } | OrderError::TransitionRefused { .. } => {
                ReconcileError::Conflict(e.to_string())
            }
            OrderError::Product(inner) => inner.into(),
            OrderError::ActorCommunicationError(_) => ReconcileError::Persistence(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Counter, OrderStatus};

    #[test]
    fn test_product_errors_keep_their_category_through_orders() {
        let missing = OrderError::Product(ProductError::NotFound("product_4".to_string()));
        assert!(matches!(
            ReconcileError::from(missing),
            ReconcileError::NotFound(msg) if msg.contains("product_4")
        ));

        let refused = OrderError::TransitionRefused {
            order: "order_1".to_string(),
            from: OrderStatus::Prebooked,
            to: OrderStatus::Ordered,
            source: ProductError::CounterUnderflow {
                product: "product_2".to_string(),
                counter: Counter::Stock,
                current: 0,
                change: -1,
            },
        };
        let err = ReconcileError::from(refused);
        assert!(matches!(&err, ReconcileError::Conflict(_)));
        assert!(err.to_string().contains("order_1 stays prebooked"));

        let closed = ProductError::ActorCommunicationError("Actor closed".to_string());
        assert!(matches!(
            ReconcileError::from(closed),
            ReconcileError::Persistence(_)
        ));
    }
}
