//! Custom actions and queries for the Menu actor.
//!
//! Actions address a single [`MenuItem`]; queries read the whole catalog in one
//! message, so a price lookup for several items sees one consistent catalog.

use crate::model::{MenuItem, MenuItemId, PriceSnapshot};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Soft delete. The item stays stored but can no longer be listed or ordered.
    Deactivate,
}

#[derive(Debug, Clone)]
pub enum MenuQuery {
    /// Active items ordered by category, then name.
    Active,
    /// Current price, name and category of every requested item.
    ///
    /// # Errors
    /// Fails with the smallest id that is missing or inactive.
    Snapshot(BTreeSet<MenuItemId>),
}

/// Results from MenuQuery - variants match 1:1 with MenuQuery
#[derive(Debug, Clone)]
pub enum MenuQueryResult {
    Active(Vec<MenuItem>),
    Snapshot(PriceSnapshot),
}
