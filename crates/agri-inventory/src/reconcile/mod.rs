//! # Inventory Reconciliation
//!
//! The two components that keep `stock`, `prebooked` and `sold` consistent:
//!
//! - [`StatusTransitionHandler`] applies the counter effects of an order status change.
//! - [`StockReplenisher`] sets a product's stock and, when it rises from zero, converts
//!   waiting prebookings oldest first.
//!
//! Both hold clients only and re-read state from the actors on every call.

pub mod error;
pub mod replenish;
pub mod rules;
pub mod status;

pub use error::ReconcileError;
pub use replenish::{ConversionOutcome, ConversionResult, StockReplenisher, StockUpdateReport};
pub use status::{OrderDetails, ResolvedLine, StatusTransitionHandler};
