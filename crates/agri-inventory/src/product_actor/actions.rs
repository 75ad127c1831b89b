//! Custom actions for the Product actor.
//!
//! Every action runs inside the product actor's mailbox loop, so the read of a counter and
//! the write that depends on it can never interleave with another writer.

use crate::model::{CounterDelta, Product};

#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Applies a signed change to all three counters, or to none of them.
    ///
    /// # Errors
    /// Fails with `CounterUnderflow` if any counter would drop below zero.
    Adjust(CounterDelta),
    /// Overwrites `stock` and reports what it was before the write.
    SetStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    Adjusted(Product),
    StockSet { previous: u32, product: Product },
}
