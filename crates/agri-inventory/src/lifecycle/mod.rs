//! # System Lifecycle
//!
//! [`InventorySystem`] starts the product actor and the order actor, injecting a product
//! client into the order actor at `run()` time:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = product_actor::new(capacity);
//! let (order_actor, order_client) = order_actor::new(capacity);
//!
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(order_actor.run(product_client.clone()));
//! ```
//!
//! Shutdown is channel closure: once every client is dropped each actor's `recv()` returns
//! `None` and the loop ends.
//!
//! [`init_tracing`] installs the subscriber used by the binary.

pub mod inventory_system;
pub mod telemetry;

pub use inventory_system::*;
pub use telemetry::*;
