//! # Order Client
//!
//! Typed API over the `Order` actor. Counter side effects happen inside the actor; this
//! client only sends requests and recovers [`OrderError`]s.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, ProductId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    /// Places an order; counters are reserved or sold by the order actor before it is stored.
    #[instrument(skip(self, params), fields(status = %params.status))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "place_order called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order accepted");
        Ok(id)
    }

    /// Fetches an order, treating absence as an error.
    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Moves the order to `status`, returning the status it had before.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(OrderStatus, Order), OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::Transition(status))
            .await
        {
            Ok(OrderActionResult::Transitioned { previous, order }) => Ok((previous, order)),
            Ok(_) => unreachable!("Transition action must return Transitioned result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn convert_prebooking(
        &self,
        id: OrderId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Order, OrderError> {
        match self
            .inner
            .perform_action(
                id,
                OrderAction::ConvertPrebooking {
                    product_id,
                    quantity,
                },
            )
            .await
        {
            Ok(OrderActionResult::Converted(order)) => Ok(order),
            Ok(_) => unreachable!("ConvertPrebooking action must return Converted result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Prebookings that reference `product_id`, oldest first.
    ///
    /// Orders created at the same instant are served in id order.
    #[instrument(skip(self))]
    pub async fn prebookings_for(&self, product_id: ProductId) -> Result<Vec<Order>, OrderError> {
        let mut pending: Vec<Order> = self
            .list()
            .await?
            .into_iter()
            .filter(|order| order.status == OrderStatus::Prebooked && order.references(product_id))
            .collect();
        pending.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        debug!(count = pending.len(), "Pending prebookings");
        Ok(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineItem;
    use actor_framework::mock::MockClient;
    use chrono::{TimeZone, Utc};

    fn prebooking(id: u32, product: u32, minute: u32) -> Order {
        Order::new(
            OrderId(id),
            OrderStatus::Prebooked,
            vec![LineItem {
                product_id: ProductId(product),
                quantity: 1,
                price: 5.0,
            }],
            Utc.with_ymd_and_hms(2024, 3, 1, 8, minute, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_prebookings_are_filtered_and_fifo() {
        let mut mock = MockClient::<Order>::new();
        let mut shipped = prebooking(4, 1, 0);
        shipped.status = OrderStatus::Shipped;
        mock.expect_list().return_ok(vec![
            prebooking(3, 1, 30),
            prebooking(1, 1, 10),
            prebooking(2, 2, 5),
            shipped,
            prebooking(5, 1, 10),
        ]);

        let client = OrderClient::new(mock.client());
        let pending = client.prebookings_for(ProductId(1)).await.unwrap();

        let ids: Vec<u32> = pending.iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![1, 5, 3]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_status_unwraps_previous() {
        let mut mock = MockClient::<Order>::new();
        let mut confirmed = prebooking(1, 1, 0);
        confirmed.status = OrderStatus::Confirmed;
        mock.expect_action(OrderId(1))
            .return_ok(OrderActionResult::Transitioned {
                previous: OrderStatus::Ordered,
                order: confirmed,
            });

        let client = OrderClient::new(mock.client());
        let (previous, order) = client
            .update_status(OrderId(1), OrderStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(previous, OrderStatus::Ordered);
        assert_eq!(order.status, OrderStatus::Confirmed);
        mock.verify();
    }

    #[tokio::test]
    async fn test_typed_errors_survive_the_actor_boundary() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(2))
            .return_err(FrameworkError::EntityError(Box::new(OrderError::NotPrebooked {
                order: "order_2".to_string(),
                status: OrderStatus::Cancelled,
            })));
        mock.expect_get(OrderId(3)).return_ok(None);

        let client = OrderClient::new(mock.client());
        let err = client
            .convert_prebooking(OrderId(2), ProductId(1), 1)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OrderError::NotPrebooked {
                status: OrderStatus::Cancelled,
                ..
            }
        ));

        let err = client.order(OrderId(3)).await.unwrap_err();
        assert_eq!(err, OrderError::NotFound("order_3".to_string()));
        mock.verify();
    }
}
