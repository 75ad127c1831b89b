//! Order Status Transition Handler.

use super::error::ReconcileError;
use crate::clients::{OrderClient, ProductClient};
use crate::model::{Order, OrderId, OrderStatus, Product, ProductId};
use actor_framework::ActorClient;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

/// A line item with its product resolved for display.
///
/// `product` is `null` when the product no longer exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLine {
    pub product_id: ProductId,
    pub product: Option<Product>,
    pub quantity: u32,
    pub price: f64,
}

/// An order as returned to the back office.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: OrderId,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<OrderStatus>,
    pub items: Vec<ResolvedLine>,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_at: Option<DateTime<Utc>>,
    pub legacy: bool,
}

/// Applies status changes requested by an administrator.
///
/// The order actor does the work: it applies the per-line counter effect of the
/// `(previous, new)` pair through the product actor, then writes the status. A request for
/// the status the order already has changes nothing.
#[derive(Clone)]
pub struct StatusTransitionHandler {
    orders: OrderClient,
    products: ProductClient,
}

impl StatusTransitionHandler {
    pub fn new(orders: OrderClient, products: ProductClient) -> Self {
        Self { orders, products }
    }

    /// Moves `order_id` to `status` and returns the order with its products resolved.
    ///
    /// # Errors
    /// - `NotFound` if the order does not exist.
    /// - `Conflict` if a counter write was refused; the order and counters are unchanged.
    /// - `Persistence` if an actor is unreachable.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<OrderDetails, ReconcileError> {
        let (previous, order) = self.orders.update_status(order_id, status).await?;
        info!(%order_id, %previous, %status, "Order status updated");
        let mut details = self.resolve(order).await?;
        details.previous_status = Some(previous);
        Ok(details)
    }

    #[instrument(skip(self))]
    pub async fn order_details(&self, order_id: OrderId) -> Result<OrderDetails, ReconcileError> {
        let order = self.orders.order(order_id).await?;
        self.resolve(order).await
    }

    async fn resolve(&self, order: Order) -> Result<OrderDetails, ReconcileError> {
        let mut items = Vec::with_capacity(order.items.len());
        for line in order.items {
            let product = self.products.get(line.product_id).await?;
            items.push(ResolvedLine {
                product_id: line.product_id,
                product,
                quantity: line.quantity,
                price: line.price,
            });
        }
        Ok(OrderDetails {
            id: order.id,
            status: order.status,
            previous_status: None,
            items,
            total_amount: order.total_amount,
            created_at: order.created_at,
            converted_at: order.converted_at,
            legacy: order.legacy,
        })
    }
}
