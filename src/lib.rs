//! # Kitchen POS
//!
//! Order and kitchen-ticket lifecycle engine for a restaurant. Orders are priced
//! from a menu at the moment of sale, carry integer-cent totals with sales tax,
//! move from `open` to `paid` (or `void`) exactly once, and feed a kitchen board
//! where each line item is tracked from `queued` to `served`.
//!
//! ## Architecture
//!
//! Every stateful component is a [`ResourceActor`](actor_framework::ResourceActor):
//! a Tokio task that owns its store and handles one message at a time. That single
//! owner is what makes `create` all-or-nothing and `pay` a compare-and-set, with no
//! locks anywhere in this crate.
//!
//! - **Menu catalog** ([`menu_actor`]) - menu items and the one-shot price snapshot.
//! - **Order ledger** ([`order_actor`]) - orders, line items, totals, payment status.
//! - **Kitchen tracker** ([`kitchen`]) - a view over the ledger's line items.
//! - **Controller** ([`controller`]) - raw-input normalization and order placement.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain serde types: ids, money, [`Order`](model::Order), [`TicketView`](model::TicketView).
//!
//! ### 2. The Interface ([`clients`])
//! Wraps the generic `ResourceClient` in domain-specific clients that return typed errors.
//! - **Key items**: [`MenuClient`](clients::MenuClient), [`OrderClient`](clients::OrderClient),
//!   [`KitchenClient`](clients::KitchenClient).
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! Spins up the actors, wires them together and shuts them down.
//! - **Key items**: [`PosSystem`](lifecycle::PosSystem),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 4. Settings ([`config`])
//! [`PosConfig`](config::PosConfig), read from `POS_*` environment variables.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test --workspace
//! ```

pub mod clients;
pub mod config;
pub mod controller;
pub mod kitchen;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
