//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! The output is compact and hides module paths (`with_target(false)`); the
//! actors tag every event with an `entity_type` field instead. Filtering comes
//! from `RUST_LOG` and falls back to `info`.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Order, payment and ticket events
//! RUST_LOG=info cargo run
//!
//! # Full payloads for every request an actor receives
//! RUST_LOG=debug cargo run
//!
//! # Only the generic actor loop
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="MenuItem"
//! INFO Actor started entity_type="Order"
//! INFO place_order:create_order: Created entity_type="Order" id=1 size=1
//! INFO place_order:create_order: Order created order_id=1
//! INFO kitchen:update_ticket_status: Action ok entity_type="Order" id=1
//! WARN payment:pay_order: Action failed entity_type="Order" id=1 error=Order 1 is already paid
//! ```
//!
//! Span names (`place_order:create_order`) come from the demo's `info_span!`
//! wrappers and the `#[instrument]` attributes on the controller and clients.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
