//! Typed clients for the product and order actors.

pub mod order_client;
pub mod product_client;

pub use order_client::OrderClient;
pub use product_client::ProductClient;
