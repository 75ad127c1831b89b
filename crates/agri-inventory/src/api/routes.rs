//! Back-office handlers.

use super::dto::{coerce_stock, ProductResponse, StatusRequest, StockRequest, StockResponse};
use super::error::ApiError;
use super::AppState;
use crate::model::{OrderId, OrderStatus, ProductId};
use crate::reconcile::OrderDetails;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

fn order_id(raw: &str) -> Result<OrderId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found(format!("Order not found: {raw}")))
}

fn product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found(format!("Product not found: {raw}")))
}

/// `PUT /admin/orders/{orderId}/status`
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<StatusRequest>, JsonRejection>,
) -> Result<Json<OrderDetails>, ApiError> {
    let id = order_id(&raw_id)?;
    let Json(request) = body.map_err(|e| ApiError::validation(e.body_text()))?;
    let status: OrderStatus = request
        .status
        .parse()
        .map_err(|e: crate::model::UnknownStatus| ApiError::validation(e.to_string()))?;

    let details = state.status_handler.update_status(id, status).await?;
    Ok(Json(details))
}

/// `PUT /admin/products/{productId}/stock`
pub async fn update_product_stock(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<StockRequest>, JsonRejection>,
) -> Result<Json<StockResponse>, ApiError> {
    let id = product_id(&raw_id)?;
    let Json(request) = body.map_err(|e| ApiError::validation(e.body_text()))?;
    let stock = coerce_stock(&request.stock).map_err(ApiError::validation)?;

    let report = state.replenisher.update_stock(id, stock).await?;
    Ok(Json(StockResponse {
        message: report.message(),
        report,
    }))
}

/// `GET /admin/orders/{orderId}`
pub async fn get_order(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<OrderDetails>, ApiError> {
    let id = order_id(&raw_id)?;
    Ok(Json(state.status_handler.order_details(id).await?))
}

/// `GET /admin/products/{productId}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = product_id(&raw_id)?;
    let product = state.replenisher.product(id).await?;
    Ok(Json(ProductResponse { product }))
}
