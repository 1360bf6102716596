//! # Order Actor
//!
//! The ledger: canonical record of every order, its captured line items, its
//! totals and its payment status. The kitchen board is a query over the same
//! store, so tickets and orders never disagree.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`] and [`OrderQuery`]
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Context
//!
//! The actor runs with a [`LedgerContext`]: the tax rate applied to new orders,
//! the sequence line-item ids are drawn from and the [`LedgerClock`] that
//! stamps creation and bump times. Order ids come from the actor itself.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::{LineItemId, Order, TaxRate};
use actor_framework::ResourceActor;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

/// Shared, strictly increasing line-item id source.
#[derive(Debug, Clone)]
pub struct IdSequence(Arc<AtomicU64>);

impl IdSequence {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU64::new(1)))
    }

    pub fn next_id(&self) -> LineItemId {
        LineItemId(self.0.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall clock that never runs backwards.
///
/// Orders and tickets sort by timestamp first, so a clock step must not let a
/// newer order look older than one already recorded. If the wall clock falls
/// behind the last reading, the last reading is returned again.
#[derive(Debug, Clone)]
pub struct LedgerClock(Arc<AtomicI64>);

impl LedgerClock {
    pub fn new() -> Self {
        Self(Arc::new(AtomicI64::new(i64::MIN)))
    }

    /// A clock whose readings are never earlier than `floor`.
    pub fn starting_at(floor: DateTime<Utc>) -> Self {
        let clock = Self::new();
        clock.observe(floor);
        clock
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.observe(Utc::now())
    }

    fn observe(&self, wall: DateTime<Utc>) -> DateTime<Utc> {
        let Some(nanos) = wall.timestamp_nanos_opt() else {
            return wall;
        };
        let previous = self.0.fetch_max(nanos, Ordering::SeqCst);
        if previous > nanos {
            DateTime::from_timestamp_nanos(previous)
        } else {
            wall
        }
    }
}

impl Default for LedgerClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Dependencies injected into the ledger actor at `run` time.
#[derive(Debug, Clone)]
pub struct LedgerContext {
    pub tax_rate: TaxRate,
    pub line_item_ids: IdSequence,
    pub clock: LedgerClock,
}

impl LedgerContext {
    pub fn new(tax_rate: TaxRate) -> Self {
        Self {
            tax_rate,
            line_item_ids: IdSequence::new(),
            clock: LedgerClock::new(),
        }
    }
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
