//! # HTTP Adapter
//!
//! Back-office routes over the two reconciliation components. Authentication is expected
//! in front of this router.
//!
//! | Method | Path | |
//! |---|---|---|
//! | `PUT` | `/admin/orders/{orderId}/status` | body `{ "status": "ordered" }` |
//! | `PUT` | `/admin/products/{productId}/stock` | body `{ "stock": 12 }` |
//! | `GET` | `/admin/orders/{orderId}` | order with products resolved |
//! | `GET` | `/admin/products/{productId}` | product and counters |
//!
//! Errors are `{ "error": code, "message": text }` with 404, 400, 409 or 500.

pub mod dto;
pub mod error;
pub mod routes;

use crate::reconcile::{StatusTransitionHandler, StockReplenisher};
use axum::routing::{get, put};
use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub status_handler: StatusTransitionHandler,
    pub replenisher: StockReplenisher,
}

impl AppState {
    pub fn new(status_handler: StatusTransitionHandler, replenisher: StockReplenisher) -> Self {
        Self {
            status_handler,
            replenisher,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/admin/orders/{order_id}", get(routes::get_order))
        .route("/admin/orders/{order_id}/status", put(routes::update_order_status))
        .route("/admin/products/{product_id}", get(routes::get_product))
        .route("/admin/products/{product_id}/stock", put(routes::update_product_stock))
        .with_state(state)
}
