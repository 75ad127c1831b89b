//! Customer orders, their lifecycle status and the two accepted line-item shapes.

use crate::model::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    /// Accepts `7` as well as `order_7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        raw.strip_prefix("order_").unwrap_or(raw).parse().map(Self)
    }
}

/// Lifecycle of an order.
///
/// ```text
/// prebooked -> ordered -> confirmed -> shipped -> delivered
/// prebooked -> cancelled
/// ordered   -> cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Prebooked,
    Ordered,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Prebooked,
        OrderStatus::Ordered,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Prebooked => "prebooked",
            OrderStatus::Ordered => "ordered",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether `next` is an edge of the lifecycle graph.
    ///
    /// Informational: transitions off the graph are still written, just without counter
    /// effects.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Prebooked, Ordered)
                | (Prebooked, Cancelled)
                | (Ordered, Confirmed)
                | (Ordered, Cancelled)
                | (Confirmed, Shipped)
                | (Shipped, Delivered)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status '{0}', expected one of prebooked, ordered, confirmed, shipped, delivered, cancelled")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One product line of an order. `price` is the unit price when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

/// A line item as submitted by checkout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

/// The two order shapes accepted at ingestion.
///
/// Older orders carry a bare list of product ids with no quantities or prices. Both shapes
/// are normalized into `Vec<LineItem>` when the order is built, so nothing downstream ever
/// sees the legacy form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrderLines {
    Items(Vec<LineItemInput>),
    LegacyProducts(Vec<ProductId>),
}

impl OrderLines {
    pub fn is_legacy(&self) -> bool {
        matches!(self, OrderLines::LegacyProducts(_))
    }

    /// Legacy entries become one unit each with a zero price, to be snapshotted later.
    pub fn normalize(self) -> Vec<LineItem> {
        match self {
            OrderLines::Items(items) => items
                .into_iter()
                .map(|item| LineItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            OrderLines::LegacyProducts(ids) => ids
                .into_iter()
                .map(|product_id| LineItem {
                    product_id,
                    quantity: 1,
                    price: 0.0,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
    /// Sum of `price * quantity`, fixed when the order is placed.
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    /// Set when a prebooking is converted by a stock replenishment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_at: Option<DateTime<Utc>>,
    /// Placed with the legacy product-id list.
    pub legacy: bool,
}

impl Order {
    /// Creates a new Order instance; the total is derived from `items`.
    pub fn new(
        id: OrderId,
        status: OrderStatus,
        items: Vec<LineItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total_amount = Self::total_of(&items);
        Self {
            id,
            status,
            items,
            total_amount,
            created_at,
            converted_at: None,
            legacy: false,
        }
    }

    pub fn total_of(items: &[LineItem]) -> f64 {
        items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    pub fn references(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|item| item.product_id == product_id)
    }

    /// Units of `product_id` across every line of this order.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .filter(|item| item.product_id == product_id)
            .map(|item| item.quantity)
            .sum()
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub status: OrderStatus,
    #[serde(alias = "products")]
    pub items: OrderLines,
    /// Original placement time for imported orders; defaults to now.
    #[serde(default)]
    pub placed_at: Option<DateTime<Utc>>,
}

impl OrderCreate {
    pub fn prebooking(items: Vec<LineItemInput>) -> Self {
        Self {
            status: OrderStatus::Prebooked,
            items: OrderLines::Items(items),
            placed_at: None,
        }
    }

    pub fn ordered(items: Vec<LineItemInput>) -> Self {
        Self {
            status: OrderStatus::Ordered,
            items: OrderLines::Items(items),
            placed_at: None,
        }
    }

    pub fn placed_at(mut self, at: DateTime<Utc>) -> Self {
        self.placed_at = Some(at);
        self
    }
}

impl LineItemInput {
    pub fn new(product_id: ProductId, quantity: u32, price: f64) -> Self {
        Self {
            product_id,
            quantity,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_text() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("Shipped!".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_lifecycle_graph() {
        use OrderStatus::*;
        assert!(Prebooked.can_transition_to(Ordered));
        assert!(Ordered.can_transition_to(Cancelled));
        assert!(Shipped.can_transition_to(Delivered));
        assert!(!Delivered.can_transition_to(Prebooked));
        assert!(!Confirmed.can_transition_to(Cancelled));
        assert!(Delivered.is_terminal() && Cancelled.is_terminal());
        assert!(!Shipped.is_terminal());
    }

    #[test]
    fn test_both_line_shapes_deserialize() {
        let modern: OrderCreate = serde_json::from_str(
            r#"{"status":"prebooked","items":[{"productId":1,"quantity":2,"price":9.5}]}"#,
        )
        .unwrap();
        assert!(!modern.items.is_legacy());
        let lines = modern.items.normalize();
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].price, 9.5);

        let legacy: OrderCreate =
            serde_json::from_str(r#"{"status":"ordered","products":[1,2,1]}"#).unwrap();
        assert!(legacy.items.is_legacy());
        let lines = legacy.items.normalize();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn test_quantity_of_sums_repeated_lines() {
        let order = Order::new(
            OrderId(1),
            OrderStatus::Prebooked,
            vec![
                LineItem {
                    product_id: ProductId(1),
                    quantity: 2,
                    price: 3.0,
                },
                LineItem {
                    product_id: ProductId(2),
                    quantity: 1,
                    price: 10.0,
                },
                LineItem {
                    product_id: ProductId(1),
                    quantity: 1,
                    price: 3.0,
                },
            ],
            Utc::now(),
        );
        assert_eq!(order.quantity_of(ProductId(1)), 3);
        assert_eq!(order.quantity_of(ProductId(9)), 0);
        assert!(order.references(ProductId(2)));
        assert_eq!(order.total_amount, 19.0);
    }
}
