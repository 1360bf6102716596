//! # Kitchen Ticket Tracker
//!
//! Tickets are the ledger's line items seen from the kitchen. There is no
//! separate ticket store: [`KitchenClient`](crate::clients::KitchenClient) talks to
//! the ledger actor and only ever touches kitchen status, never payment.

pub mod error;

pub use error::*;
