//! Error types for the Order actor.

use crate::menu_actor::MenuError;
use crate::model::{LineItemId, MenuItemId, OrderId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order as a whole is malformed (no items, amounts overflow, bad limit).
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The catalog has no active entry for this item.
    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(MenuItemId),

    /// A single line is malformed (zero quantity, no captured price).
    #[error("Invalid line item: {0}")]
    InvalidLineItem(String),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Line item not found: {0}")]
    LineItemNotFound(LineItemId),

    #[error("Order {0} is already paid")]
    AlreadyPaid(OrderId),

    #[error("Order {0} is void")]
    OrderVoided(OrderId),

    /// Raw text could not be parsed as an identifier.
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The ledger or catalog actor could not be reached.
    #[error("Order store unavailable: {0}")]
    Persistence(String),
}

impl From<MenuError> for OrderError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::UnknownMenuItem(id) => OrderError::UnknownMenuItem(id),
            MenuError::Validation(msg) => OrderError::Validation(msg),
            MenuError::NotFound(id) => OrderError::Persistence(format!("menu item {id} vanished")),
            MenuError::Persistence(msg) => OrderError::Persistence(msg),
        }
    }
}
