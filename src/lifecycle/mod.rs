//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created first and receive their dependencies when they start
//! running:
//!
//! ```rust,ignore
//! let (menu_actor, menu_client) = menu_actor::new(32);
//! let (order_actor, order_client) = order_actor::new(32);
//!
//! tokio::spawn(menu_actor.run(()));
//! tokio::spawn(order_actor.run(LedgerContext::new(TaxRate::DEFAULT)));
//! ```
//!
//! The ledger's context carries the tax rate and the line-item id sequence.
//! The catalog needs nothing.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors finish** - Already-queued messages are still answered
//! 4. **Await completion** - [`PosSystem::shutdown`] joins every actor task
//!
//! See [`telemetry`] for logging setup.

pub mod pos_system;
pub mod telemetry;

pub use pos_system::*;
pub use telemetry::*;
