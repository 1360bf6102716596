//! Error types for the kitchen ticket tracker.

use thiserror::Error;

/// Errors that can occur while reading or updating kitchen tickets.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KitchenError {
    /// No line item has the given id.
    #[error("Ticket not found: {0}")]
    NotFound(String),

    /// The requested status is outside `queued/prepping/ready/served`.
    #[error("Invalid kitchen status: {0:?}")]
    InvalidStatus(String),

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The ledger actor could not be reached.
    #[error("Ticket store unavailable: {0}")]
    Persistence(String),
}
