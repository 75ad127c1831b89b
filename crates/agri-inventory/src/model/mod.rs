//! Domain data: products with their inventory counters and orders with their line items.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
