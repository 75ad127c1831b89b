//! # Product Client
//!
//! Typed API over the `Product` actor. Entity errors come back as [`ProductError`] by
//! downcasting the framework's boxed error.
use crate::model::{CounterDelta, Product, ProductCreate, ProductId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches a product, treating absence as an error.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Applies `delta` to the product's counters in one conditional write.
    #[instrument(skip(self))]
    pub async fn adjust_counters(
        &self,
        id: ProductId,
        delta: CounterDelta,
    ) -> Result<Product, ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::Adjust(delta))
            .await
        {
            Ok(ProductActionResult::Adjusted(product)) => Ok(product),
            Ok(_) => unreachable!("Adjust action must return Adjusted result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Overwrites `stock`, returning the level it replaced and the updated product.
    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: ProductId, stock: u32) -> Result<(u32, Product), ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::SetStock(stock))
            .await
        {
            Ok(ProductActionResult::StockSet { previous, product }) => Ok((previous, product)),
            Ok(_) => unreachable!("SetStock action must return StockSet result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
