//! Error types for the Product actor.

use crate::model::Counter;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A conditional counter write was refused; nothing was changed.
    #[error("{counter} of {product} cannot change by {change} (currently {current})")]
    CounterUnderflow {
        product: String,
        counter: Counter,
        current: u32,
        change: i64,
    },

    /// The creation payload was rejected.
    #[error("Invalid product: {0}")]
    Invalid(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
