//! Creates, wires and shuts down the product and order actors.

use crate::clients::{OrderClient, ProductClient};
use crate::config::DEFAULT_MAILBOX_CAPACITY;
use crate::reconcile::{StatusTransitionHandler, StockReplenisher};
use crate::{order_actor, product_actor};
use tokio::task::JoinHandle;
use tracing::info;

/// The running inventory core.
///
/// Orders depend on products, never the other way round, so closing every client shuts
/// the order actor down first and the product actor right after.
pub struct InventorySystem {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl InventorySystem {
    /// Starts both actors. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAILBOX_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (product_actor, product_client) = product_actor::new(capacity);
        let (order_actor, order_client) = order_actor::new(capacity);

        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));
        info!(capacity, "Inventory system started");

        Self {
            product_client,
            order_client,
            handles: vec![order_handle, product_handle],
        }
    }

    pub fn status_handler(&self) -> StatusTransitionHandler {
        StatusTransitionHandler::new(self.order_client.clone(), self.product_client.clone())
    }

    pub fn replenisher(&self) -> StockReplenisher {
        StockReplenisher::new(self.product_client.clone(), self.order_client.clone())
    }

    /// Drops this system's clients and waits for both actors to stop.
    ///
    /// Handlers or replenishers still alive elsewhere keep the actors running, so drop them
    /// first.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        drop(self.order_client);
        drop(self.product_client);
        for handle in self.handles {
            handle.await?;
        }
        info!("Inventory system stopped");
        Ok(())
    }
}
