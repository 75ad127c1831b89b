//! # Order Actor
//!
//! Owns every order. Its context is a [`ProductClient`](crate::clients::ProductClient),
//! so placement, status transitions and conversions apply their counter effects from
//! inside this actor while the order itself is held by the mailbox loop.
//!
//! The product actor never calls back into this one, which keeps the dependency graph
//! acyclic.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
///
/// Run it with a [`ProductClient`](crate::clients::ProductClient) as context.
pub fn new(capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, OrderClient::new(generic_client))
}
