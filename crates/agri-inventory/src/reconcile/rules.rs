//! Per-unit counter effects of order placement, status transitions and conversions.
//!
//! Callers scale the returned delta by the line-item quantity.

use crate::model::{CounterDelta, OrderStatus};

/// Effect of moving an order from `previous` to `next`, per unit of each line item.
///
/// | previous -> next        | stock | prebooked | sold |
/// |-------------------------|-------|-----------|------|
/// | prebooked -> ordered    |  -1   |    -1     |  +1  |
/// | prebooked -> cancelled  |       |    -1     |      |
/// | ordered -> cancelled    |  +1   |           |  -1  |
///
/// Every other pair, including `previous == next`, has no effect.
pub fn transition_effect(previous: OrderStatus, next: OrderStatus) -> CounterDelta {
    use OrderStatus::*;
    match (previous, next) {
        (Prebooked, Ordered) => CounterDelta {
            stock: -1,
            prebooked: -1,
            sold: 1,
        },
        (Prebooked, Cancelled) => CounterDelta {
            stock: 0,
            prebooked: -1,
            sold: 0,
        },
        (Ordered, Cancelled) => CounterDelta {
            stock: 1,
            prebooked: 0,
            sold: -1,
        },
        _ => CounterDelta::NONE,
    }
}

/// Effect of placing an order directly in `status`.
///
/// A prebooking promises units; an immediate order takes them from stock. Orders cannot be
/// placed in any other status.
pub fn placement_effect(status: OrderStatus) -> Option<CounterDelta> {
    match status {
        OrderStatus::Prebooked => Some(CounterDelta {
            stock: 0,
            prebooked: 1,
            sold: 0,
        }),
        OrderStatus::Ordered => Some(CounterDelta {
            stock: -1,
            prebooked: 0,
            sold: 1,
        }),
        _ => None,
    }
}

/// Effect of converting a prebooking once stock arrives.
pub fn conversion_effect() -> CounterDelta {
    transition_effect(OrderStatus::Prebooked, OrderStatus::Ordered)
}
