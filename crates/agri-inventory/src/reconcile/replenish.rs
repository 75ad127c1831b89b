//! Stock Replenishment Processor.

use super::error::ReconcileError;
use crate::clients::{OrderClient, ProductClient};
use crate::model::{OrderId, Product, ProductId};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// What happened to one prebooking during a conversion scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ConversionOutcome {
    Converted,
    /// Not enough stock left for this prebooking; a later, smaller one may still fit.
    Skipped,
    /// The conversion was attempted and refused. Safe to retry individually.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub order_id: OrderId,
    pub quantity: u32,
    #[serde(flatten)]
    pub outcome: ConversionOutcome,
}

/// Result of a stock update.
///
/// The scan fields are present only when the update took stock from zero to positive.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdateReport {
    pub product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prebookings_processed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<Vec<ConversionResult>>,
}

impl StockUpdateReport {
    pub fn scanned(&self) -> bool {
        self.conversions.is_some()
    }

    pub fn message(&self) -> String {
        match self.prebookings_processed {
            Some(n) if n > 0 => format!("Stock updated. {n} prebookings converted to orders"),
            _ => "Stock updated successfully".to_string(),
        }
    }
}

/// Sets product stock and serves waiting prebookings when stock arrives.
#[derive(Clone)]
pub struct StockReplenisher {
    products: ProductClient,
    orders: OrderClient,
}

impl StockReplenisher {
    pub fn new(products: ProductClient, orders: OrderClient) -> Self {
        Self { products, orders }
    }

    pub async fn product(&self, product_id: ProductId) -> Result<Product, ReconcileError> {
        Ok(self.products.product(product_id).await?)
    }

    /// Writes `new_stock` and, on a `0 -> positive` edge, converts prebookings FIFO.
    ///
    /// Every prebooking is considered: one that needs more than what is left is skipped and
    /// the scan moves on. A failed conversion is logged and reported in `conversions`
    /// without stopping the batch.
    ///
    /// # Errors
    /// Only the stock write itself, and loading the candidates, abort the call.
    #[instrument(skip(self))]
    pub async fn update_stock(
        &self,
        product_id: ProductId,
        new_stock: u32,
    ) -> Result<StockUpdateReport, ReconcileError> {
        let (previous, product) = self.products.set_stock(product_id, new_stock).await?;
        if previous != 0 || new_stock == 0 {
            debug!(%product_id, previous, new_stock, "No conversion scan");
            return Ok(StockUpdateReport {
                product,
                prebookings_processed: None,
                remaining_stock: None,
                conversions: None,
            });
        }

        let candidates = self.orders.prebookings_for(product_id).await?;
        info!(%product_id, new_stock, candidates = candidates.len(), "Stock arrived, converting prebookings");

        let mut available = new_stock;
        let mut processed = 0;
        let mut conversions = Vec::with_capacity(candidates.len());
        for order in candidates {
            let quantity = order.quantity_of(product_id);
            let outcome = if available < quantity {
                debug!(order_id = %order.id, quantity, available, "Skipping prebooking");
                ConversionOutcome::Skipped
            } else {
                match self
                    .orders
                    .convert_prebooking(order.id, product_id, quantity)
                    .await
                {
                    Ok(_) => {
                        available -= quantity;
                        processed += 1;
                        ConversionOutcome::Converted
                    }
                    Err(e) => {
                        error!(order_id = %order.id, %product_id, error = %e, "Conversion failed");
                        ConversionOutcome::Failed {
                            error: e.to_string(),
                        }
                    }
                }
            };
            conversions.push(ConversionResult {
                order_id: order.id,
                quantity,
                outcome,
            });
        }

        let product = self.products.product(product_id).await?;
        info!(%product_id, processed, remaining = available, stock = product.stock, "Conversion scan finished");
        Ok(StockUpdateReport {
            product,
            prebookings_processed: Some(processed),
            remaining_stock: Some(available),
            conversions: Some(conversions),
        })
    }
}
