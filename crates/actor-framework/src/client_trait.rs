//! # ActorClient Trait
//!
//! Shared surface for resource-specific clients: `get` and `list` come for free once a
//! wrapper exposes its inner `ResourceClient` and says how to translate framework errors.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Silo { id: u32 }
/// #[derive(Debug)] struct SiloCreate;
/// #[derive(Debug)] enum SiloAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct SiloError(String);
///
/// #[async_trait]
/// impl ActorEntity for Silo {
///     type Id = u32;
///     type Create = SiloCreate;
///     type Action = SiloAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = SiloError;
///
///     fn from_create_params(id: u32, _: SiloCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn handle_action(&mut self, _: SiloAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct SiloClient { inner: ResourceClient<Silo> }
///
/// #[async_trait]
/// impl ActorClient<Silo> for SiloClient {
///     type Error = SiloError;
///     fn inner(&self) -> &ResourceClient<Silo> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { SiloError(e.to_string()) }
/// }
///
/// async fn usage(client: SiloClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic `ResourceClient`.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Snapshot every entity held by the actor.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
