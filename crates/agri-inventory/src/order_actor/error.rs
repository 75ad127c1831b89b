//! Error types for the Order actor.

use crate::model::OrderStatus;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// A conversion found the order no longer waiting for stock.
    #[error("{order} is {status}, not prebooked")]
    NotPrebooked { order: String, status: OrderStatus },

    /// A line's counter effect was refused. Earlier lines were reversed and the
    /// status was not changed.
    #[error("{order} stays {from}: moving to {to} was refused: {source}")]
    TransitionRefused {
        order: String,
        from: OrderStatus,
        to: OrderStatus,
        source: ProductError,
    },

    /// A product lookup or counter write failed while nothing had been committed.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
