//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state of one
//! resource type. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Every request to one actor is handled to completion before the next one starts. Two
/// clients racing on the same entity are therefore ordered by the channel: a check-then-set
/// inside `handle_action` behaves as a compare-and-set, and a query never sees a write in
/// progress. No `Mutex` or `RwLock` guards the `store`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
/// use std::collections::HashMap;
///
/// #[derive(Clone, Debug)] struct Station { id: u64, name: String }
/// #[derive(Debug)] struct StationCreate { name: String }
/// #[derive(Debug, thiserror::Error)] #[error("station error")] struct StationError;
///
/// #[async_trait]
/// impl ActorEntity for Station {
///     type Id = u64;
///     type Create = StationCreate;
///     type Update = std::convert::Infallible;
///     type Action = std::convert::Infallible;
///     type ActionResult = ();
///     type Query = ();
///     type QueryResult = usize;
///     type Context = ();
///     type Error = StationError;
///
///     fn from_create_params(id: u64, p: StationCreate, _: &()) -> Result<Self, Self::Error> {
///         Ok(Self { id, name: p.name })
///     }
///     async fn on_update(&mut self, u: Self::Update, _: &()) -> Result<(), Self::Error> { match u {} }
///     async fn handle_action(&mut self, a: Self::Action, _: &()) -> Result<(), Self::Error> { match a {} }
///     fn handle_query(store: &HashMap<u64, Self>, _: ()) -> Result<usize, Self::Error> {
///         Ok(store.len())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Station>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let grill = client.create(StationCreate { name: "grill".into() }).await.unwrap();
///     assert_eq!(grill.id, 1);
///     assert_eq!(client.query(()).await.unwrap(), 1);
/// }
/// ```
///
/// # Implementation Details
///
/// * **Create**: builds the entity with the next ID. The counter only advances when the
///   entity is stored, so rejected creates leave no gaps.
/// * **Get**: returns a clone of the entity, or `None`.
/// * **Update** / **Action**: mutate one entity in place; unknown IDs yield `NotFound`.
/// * **Query**: hands the whole store to `handle_query` by shared reference.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When the channel is full,
    /// client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // "Order" instead of "kitchen_pos::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params, &context) {
                        Ok(item) => {
                            self.next_id += 1;
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Query { query, respond_to } => {
                    debug!(entity_type, ?query, "Query");
                    let result = T::handle_query(&self.store, query)
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Query failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
