//! # ActorEntity Trait
//!
//! The contract a resource (a product, an order, ...) implements to be owned by a
//! [`ResourceActor`](crate::ResourceActor). The associated types pin down what may be sent
//! to the actor: a `Product` actor only accepts `ProductCreate` payloads and
//! `ProductAction`s, and the compiler rejects anything else.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] has a default no-op implementation. Override it when creating
//! an entity has side effects on other actors (e.g. an order adjusting product counters).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can talk to other actors. The `Context` type is handed to
/// `run()` rather than `new()`, which lets actors be created first and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier; built from the actor's `u32` sequence so ids stay monotonic.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `SetStock`, `Transition`).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()` time. Use `()` if none.
    type Context: Send + Sync;

    /// One error enum per actor, shared by every hook.
    ///
    /// A single enum keeps client code to one `match`; the cost is that an action may in
    /// theory return a variant only another action produces.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the id and payload. Runs before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    ///
    /// Mutations made before an error is returned are kept: the store is updated in place.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
