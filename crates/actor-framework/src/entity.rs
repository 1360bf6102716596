//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (menu items, orders, ...) implements
//! to be managed by the generic `ResourceActor`. It names the associated types for IDs, DTOs,
//! actions, queries, context and errors, and the hooks the actor calls for each request.
//!
//! # Architecture Note
//! The `ResourceActor` loop is written once. Each resource only describes how it is built,
//! how it changes, and how the whole collection is read. Associated types keep payloads
//! apart: a menu item's create payload cannot be sent to the order ledger.
//!
//! # Writes vs Reads
//! Writes are addressed to one entity (`on_update`, `handle_action`) and receive `&mut self`.
//! Reads that span the collection (`handle_query`) receive the whole store by shared
//! reference, so a query never observes a half-applied write.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// The mutating hooks are `#[async_trait]` so they can await other actors. The `Context` type
/// is injected into the hooks when the actor starts (`run(context)`), which allows late
/// binding of shared dependencies such as id sequences or other clients.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u64 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    /// Use `std::convert::Infallible` for resources that are never updated in place.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `MarkPaid`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Read-only requests evaluated against the whole store.
    type Query: Send + Sync + Debug;

    /// The result type returned by queries.
    type QueryResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients match on a single type,
    /// at the cost of some variants being impossible for some requests.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    ///
    /// The actor inserts the result only if this returns `Ok`, so an entity is either
    /// stored complete or not at all.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Answer a read-only query over every stored entity.
    fn handle_query(
        store: &HashMap<Self::Id, Self>,
        query: Self::Query,
    ) -> Result<Self::QueryResult, Self::Error>;
}
