//! `ActorEntity` implementation for [`Order`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::clients::ProductClient;
use crate::model::{CounterDelta, LineItem, Order, OrderCreate, OrderId, OrderStatus, ProductId};
use crate::product_actor::ProductError;
use crate::reconcile::rules;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ProductClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if rules::placement_effect(params.status).is_none() {
            return Err(OrderError::ValidationError(format!(
                "orders are placed as prebooked or ordered, not {}",
                params.status
            )));
        }

        let legacy = params.items.is_legacy();
        let items = params.items.normalize();
        if items.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one line item".to_string(),
            ));
        }
        if let Some(line) = items.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "quantity for {} must be at least 1",
                line.product_id
            )));
        }
        if let Some(line) = items
            .iter()
            .find(|line| !line.price.is_finite() || line.price < 0.0)
        {
            return Err(OrderError::ValidationError(format!(
                "price for {} must be a non-negative number",
                line.product_id
            )));
        }

        let created_at = params.placed_at.unwrap_or_else(Utc::now);
        let mut order = Order::new(id, params.status, items, created_at);
        order.legacy = legacy;
        Ok(order)
    }

    /// Places the order: snapshots legacy prices, then reserves or sells every line.
    ///
    /// A refused line leaves every counter as it was and the order is discarded.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), Self::Error> {
        if self.legacy {
            for line in &mut self.items {
                line.price = products.product(line.product_id).await?.price;
            }
        }
        self.total_amount = Order::total_of(&self.items);

        let Some(effect) = rules::placement_effect(self.status) else {
            return Err(OrderError::ValidationError(format!(
                "orders are placed as prebooked or ordered, not {}",
                self.status
            )));
        };

        if let Err(e) = self.apply_lines(effect, products).await {
            warn!(order_id = %self.id, error = %e, "Placement refused");
            return Err(e.into());
        }

        info!(
            order_id = %self.id,
            status = %self.status,
            lines = self.items.len(),
            total = self.total_amount,
            "Order placed"
        );
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        products: &ProductClient,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Transition(next) => self.transition(next, products).await,
            OrderAction::ConvertPrebooking {
                product_id,
                quantity,
            } => self.convert(product_id, quantity, products).await,
        }
    }
}

impl Order {
    async fn transition(
        &mut self,
        next: OrderStatus,
        products: &ProductClient,
    ) -> Result<OrderActionResult, OrderError> {
        let previous = self.status;
        if previous == next {
            debug!(order_id = %self.id, status = %next, "Status unchanged");
            return Ok(OrderActionResult::Transitioned {
                previous,
                order: self.clone(),
            });
        }
        if !previous.can_transition_to(next) {
            warn!(
                order_id = %self.id,
                %previous,
                %next,
                reopened = previous.is_terminal(),
                "Transition outside the order lifecycle"
            );
        }

        let effect = rules::transition_effect(previous, next);
        if let Err(e) = self.apply_lines(effect, products).await {
            warn!(order_id = %self.id, %previous, %next, error = %e, "Transition refused");
            return Err(OrderError::TransitionRefused {
                order: self.id.to_string(),
                from: previous,
                to: next,
                source: e,
            });
        }

        self.status = next;
        info!(order_id = %self.id, %previous, %next, "Status written");

        Ok(OrderActionResult::Transitioned {
            previous,
            order: self.clone(),
        })
    }

    /// Applies `effect` scaled by each line's quantity. A refused line reverses the
    /// lines already written, so on error the counters are as they were.
    async fn apply_lines(
        &self,
        effect: CounterDelta,
        products: &ProductClient,
    ) -> Result<(), ProductError> {
        if effect.is_none() {
            return Ok(());
        }
        let mut applied: Vec<&LineItem> = Vec::with_capacity(self.items.len());
        for line in &self.items {
            if let Err(e) = products
                .adjust_counters(line.product_id, effect.scaled(line.quantity))
                .await
            {
                debug!(order_id = %self.id, product_id = %line.product_id, rolled_back = applied.len(), "Line refused");
                for done in applied.iter().rev() {
                    let undo = effect.scaled(done.quantity).inverse();
                    if let Err(undo_err) = products.adjust_counters(done.product_id, undo).await {
                        error!(order_id = %self.id, product_id = %done.product_id, error = %undo_err, "Rollback failed");
                    }
                }
                return Err(e);
            }
            applied.push(line);
        }
        Ok(())
    }

    /// Compare-and-set on `prebooked`: the counters move first and the status only
    /// changes once they have, so a refused write leaves the prebooking waiting.
    async fn convert(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        products: &ProductClient,
    ) -> Result<OrderActionResult, OrderError> {
        if self.status != OrderStatus::Prebooked {
            return Err(OrderError::NotPrebooked {
                order: self.id.to_string(),
                status: self.status,
            });
        }
        let needed = self.quantity_of(product_id);
        if needed == 0 || needed != quantity {
            return Err(OrderError::ValidationError(format!(
                "{} needs {needed} of {product_id}, conversion asked for {quantity}",
                self.id
            )));
        }

        products
            .adjust_counters(product_id, rules::conversion_effect().scaled(quantity))
            .await?;

        self.status = OrderStatus::Ordered;
        self.converted_at = Some(Utc::now());
        info!(order_id = %self.id, %product_id, quantity, "Prebooking converted");
        Ok(OrderActionResult::Converted(self.clone()))
    }
}
