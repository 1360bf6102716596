//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: a default `get` built on top of the
//! wrapped `ResourceClient`, plus the hook that turns framework errors into the
//! resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
/// use std::collections::HashMap;
///
/// #[derive(Clone, Debug)] struct Table { id: u64 }
/// #[derive(Debug)] struct TableCreate;
/// #[derive(Debug, thiserror::Error)]
/// enum TableError {
///     #[error("table not found: {0}")] NotFound(String),
///     #[error("table store unavailable: {0}")] Unavailable(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u64; type Create = TableCreate; type Update = std::convert::Infallible;
///     type Action = std::convert::Infallible; type ActionResult = ();
///     type Query = (); type QueryResult = (); type Context = (); type Error = TableError;
///     fn from_create_params(id: u64, _: TableCreate, _: &()) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, u: Self::Update, _: &()) -> Result<(), Self::Error> { match u {} }
///     async fn handle_action(&mut self, a: Self::Action, _: &()) -> Result<(), Self::Error> { match a {} }
///     fn handle_query(_: &HashMap<u64, Self>, _: ()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TableClient { inner: ResourceClient<Table> }
///
/// #[async_trait]
/// impl ActorClient<Table> for TableClient {
///     type Error = TableError;
///
///     fn inner(&self) -> &ResourceClient<Table> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         match e {
///             FrameworkError::NotFound(id) => TableError::NotFound(id),
///             other => TableError::Unavailable(other.to_string()),
///         }
///     }
/// }
///
/// async fn usage(client: TableClient) {
///     // get() is provided by the trait
///     let _ = client.get(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
