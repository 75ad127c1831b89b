//! # Actor Framework
//!
//! Building blocks for resource-oriented actors on Tokio. Each resource type (products,
//! orders, ...) gets one [`ResourceActor`] that owns every entity of that type and handles
//! requests strictly one at a time.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain type, its payloads, actions and hooks.
//! 2. **Runtime** ([`ResourceActor`]) - the mailbox loop that owns the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - cloneable, typed handles.
//!
//! ## Why one actor per resource type
//!
//! Requests for one resource type are processed sequentially, so an action that reads a
//! counter and writes it back can never interleave with another writer. Read-modify-write
//! races on shared counters disappear without locks, versions or transactions.
//!
//! ## Context injection
//!
//! Dependencies are handed to [`ResourceActor::run`], not [`ResourceActor::new`]. Actors
//! can therefore be created in any order and wired afterwards:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = ResourceActor::<Product>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(product_actor.run(()));
//! // orders adjust product counters, so the order actor gets a product client
//! tokio::spawn(order_actor.run(ProductClient::new(product_client.clone())));
//! ```
//!
//! Keep the dependency graph acyclic: an actor awaiting a reply from an actor that is
//! itself awaiting the first one deadlocks both mailboxes.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from canned expectations, so an actor can be
//! tested against mocked dependencies without spawning them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
