//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent actor systems in Rust. The crate implements a
//! **Resource-Oriented Architecture (ROA)** on top of the **Actor Model**: every resource
//! type gets one actor that owns its state outright, and the rest of the program talks to
//! it through a cloneable client.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - A fixed vocabulary of requests (Create, Get, Update, Action, Query) for every resource
//! - Predictable lifecycle management
//! - Clean, uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor serializes competing writes
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::collections::HashMap;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u64, dish: String, done: bool }
//!
//! #[derive(Debug)] struct TicketCreate { dish: String }
//! #[derive(Debug)] enum TicketAction { Bump }
//! #[derive(Debug)] struct OpenTickets;
//! #[derive(Debug, thiserror::Error)]
//! enum TicketError { #[error("ticket {0} already bumped")] AlreadyBumped(u64) }
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u64;
//!     type Create = TicketCreate;
//!     type Update = std::convert::Infallible;
//!     type Action = TicketAction;
//!     type ActionResult = ();
//!     type Query = OpenTickets;
//!     type QueryResult = usize;
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_create_params(id: u64, params: TicketCreate, _: &()) -> Result<Self, Self::Error> {
//!         Ok(Self { id, dish: params.dish, done: false })
//!     }
//!
//!     async fn on_update(&mut self, update: Self::Update, _: &()) -> Result<(), Self::Error> {
//!         match update {}
//!     }
//!
//!     async fn handle_action(&mut self, action: TicketAction, _: &()) -> Result<(), Self::Error> {
//!         match action {
//!             TicketAction::Bump if self.done => Err(TicketError::AlreadyBumped(self.id)),
//!             TicketAction::Bump => { self.done = true; Ok(()) }
//!         }
//!     }
//!
//!     fn handle_query(store: &HashMap<u64, Self>, _: OpenTickets) -> Result<usize, Self::Error> {
//!         Ok(store.values().filter(|t| !t.done).count())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let ticket = client.create(TicketCreate { dish: "fries".into() }).await.unwrap();
//!     client.perform_action(ticket.id, TicketAction::Bump).await.unwrap();
//!     assert!(client.perform_action(ticket.id, TicketAction::Bump).await.is_err());
//!     assert_eq!(client.query(OpenTickets).await.unwrap(), 0);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! Actors can therefore be created first and wired afterwards, and tests can inject
//! mocked clients or fresh sequences.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - Dropping every client closes the channel and ends the actor's loop
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which hands out a real `ResourceClient<T>`
//! backed by scripted responses instead of an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
