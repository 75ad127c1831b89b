//! `ActorEntity` implementation for [`Product`].

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::Invalid("name must not be empty".to_string()));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(ProductError::Invalid(format!(
                "price must be a non-negative number, got {}",
                params.price
            )));
        }
        let mut product = Product::new(id, params.name, params.price);
        product.stock = params.stock;
        product.prebooked = params.prebooked;
        product.sold = params.sold;
        Ok(product)
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::Adjust(delta) => {
                if let Err(e) = self.apply(delta) {
                    warn!(product_id = %self.id, ?delta, error = %e, "Counter write refused");
                    return Err(e);
                }
                info!(
                    product_id = %self.id,
                    stock = self.stock,
                    prebooked = self.prebooked,
                    sold = self.sold,
                    "Counters adjusted"
                );
                Ok(ProductActionResult::Adjusted(self.clone()))
            }
            ProductAction::SetStock(stock) => {
                let previous = self.stock;
                self.stock = stock;
                info!(product_id = %self.id, previous, stock, "Stock set");
                Ok(ProductActionResult::StockSet {
                    previous,
                    product: self.clone(),
                })
            }
        }
    }
}
