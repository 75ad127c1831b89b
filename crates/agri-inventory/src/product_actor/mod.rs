//! # Product Actor
//!
//! Owns every product and its `stock` / `prebooked` / `sold` counters. All counter writes
//! go through this actor's mailbox, one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use agri_inventory::clients::ProductClient;
//! use agri_inventory::model::{CounterDelta, ProductCreate};
//! use agri_inventory::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             name: "Sorghum seed".to_string(),
//!             price: 12.5,
//!             stock: 4,
//!             prebooked: 0,
//!             sold: 0,
//!         })
//!         .await?;
//!
//!     let product = client
//!         .adjust_counters(id, CounterDelta { stock: -1, prebooked: 0, sold: 1 })
//!         .await?;
//!     assert_eq!((product.stock, product.sold), (3, 1));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, ProductClient::new(generic_client))
}
