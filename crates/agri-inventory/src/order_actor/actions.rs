//! Custom actions for the Order actor.

use crate::model::{Order, OrderStatus, ProductId};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Writes a new status and applies the counter effects of the status pair.
    Transition(OrderStatus),
    /// Turns a prebooking into an order once stock for `product_id` is available.
    ///
    /// `quantity` is what the caller budgeted from its snapshot of the order; it must still
    /// match the order's lines for that product.
    ConvertPrebooking { product_id: ProductId, quantity: u32 },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    Transitioned { previous: OrderStatus, order: Order },
    Converted(Order),
}
