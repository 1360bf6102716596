//! Catalog entries the ledger prices orders against.
//!
//! # Actor Framework
//! [`MenuItem`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`menu_actor`](crate::menu_actor) for details on:
//! - Creation parameters ([`MenuItemCreate`])
//! - Update parameters ([`MenuItemUpdate`])
//! - Custom actions ([`MenuAction`](crate::menu_actor::MenuAction))

use crate::model::{Cents, MenuItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub category: String,
    pub name: String,
    pub price_cents: Cents,
    /// Inactive items stay stored but can no longer be ordered.
    pub active: bool,
}

impl MenuItem {
    /// The fields an order copies at the moment of sale.
    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            unit_price_cents: self.price_cents,
            name: self.name.clone(),
            category: self.category.clone(),
        }
    }
}

/// Payload for adding an item to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub category: String,
    pub name: String,
    pub price_cents: Cents,
}

impl MenuItemCreate {
    pub fn new(category: impl Into<String>, name: impl Into<String>, price_cents: Cents) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            price_cents,
        }
    }
}

/// Partial update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price_cents: Option<Cents>,
}

/// Price, name and category of a menu item as captured for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSnapshot {
    pub unit_price_cents: Cents,
    pub name: String,
    pub category: String,
}

/// Resolved prices keyed by menu item.
pub type PriceSnapshot = HashMap<MenuItemId, MenuSnapshot>;
