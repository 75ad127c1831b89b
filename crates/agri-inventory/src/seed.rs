//! Startup data loaded through the normal create paths.
//!
//! ```json
//! {
//!   "products": [{ "name": "Maize seed", "price": 18.0, "stock": 0 }],
//!   "orders": [{ "status": "prebooked", "items": [{ "productId": 1, "quantity": 2, "price": 18.0 }] }]
//! }
//! ```
//!
//! Orders refer to products by their 1-based position in `products`. Placing a seeded
//! order moves counters like any other placement, so product counters in the file should
//! not already include the seeded orders.

use crate::lifecycle::InventorySystem;
use crate::model::{LineItemInput, OrderCreate, OrderLines, ProductCreate, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("order #{order} refers to product #{position}, but only {count} products are seeded")]
    UnknownProduct {
        order: usize,
        position: u32,
        count: usize,
    },
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub products: Vec<ProductCreate>,
    #[serde(default)]
    pub orders: Vec<OrderCreate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub products: usize,
    pub orders: usize,
}

pub async fn load_file(system: &InventorySystem, path: &Path) -> Result<SeedSummary, SeedError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let data: SeedData = serde_json::from_str(&raw)?;
    info!(path = %path.display(), "Loading seed data");
    load(system, data).await
}

/// Creates every product, then places every order in file order.
pub async fn load(system: &InventorySystem, data: SeedData) -> Result<SeedSummary, SeedError> {
    let mut product_ids = Vec::with_capacity(data.products.len());
    for params in data.products {
        product_ids.push(system.product_client.create_product(params).await?);
    }

    let mut orders = 0;
    for (index, mut params) in data.orders.into_iter().enumerate() {
        let order = index + 1;
        let resolve = |position: ProductId| {
            position
                .0
                .checked_sub(1)
                .and_then(|i| product_ids.get(i as usize).copied())
                .ok_or(SeedError::UnknownProduct {
                    order,
                    position: position.0,
                    count: product_ids.len(),
                })
        };
        params.items = match params.items {
            OrderLines::Items(items) => OrderLines::Items(
                items
                    .into_iter()
                    .map(|item| {
                        Ok(LineItemInput {
                            product_id: resolve(item.product_id)?,
                            ..item
                        })
                    })
                    .collect::<Result<_, SeedError>>()?,
            ),
            OrderLines::LegacyProducts(ids) => OrderLines::LegacyProducts(
                ids.into_iter()
                    .map(resolve)
                    .collect::<Result<_, SeedError>>()?,
            ),
        };
        system.order_client.place_order(params).await?;
        orders += 1;
    }

    let summary = SeedSummary {
        products: product_ids.len(),
        orders,
    };
    info!(products = summary.products, orders = summary.orders, "Seed data loaded");
    Ok(summary)
}
