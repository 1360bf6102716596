//! # Menu Actor
//!
//! The catalog the ledger prices orders against. Items are created, edited and
//! soft-deleted here; orders only ever read them through a price snapshot.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`MenuItem`]
//! - [`actions`] - [`MenuAction`] and the catalog-wide [`MenuQuery`]
//! - [`error`] - [`MenuError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use kitchen_pos::menu_actor;
//! use kitchen_pos::model::MenuItemCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = menu_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let fries = client.create_item(MenuItemCreate::new("Sides", "Fries", 399)).await?;
//!     assert!(fries.active);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use actor_framework::ResourceActor;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
