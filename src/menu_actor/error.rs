//! Error types for the Menu actor.

use crate::model::MenuItemId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// No catalog entry has the given id.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A requested item is missing or no longer active.
    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(MenuItemId),

    /// The item data provided is invalid.
    #[error("Menu validation error: {0}")]
    Validation(String),

    /// The catalog actor could not be reached.
    #[error("Menu store unavailable: {0}")]
    Persistence(String),
}
