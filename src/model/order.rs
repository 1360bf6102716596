//! Orders with their captured line items and derived totals.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`order_actor`](crate::order_actor) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
//! - Queries ([`OrderQuery`](crate::order_actor::OrderQuery))

use crate::model::{
    Cents, KitchenStatus, LineItemId, MenuItemId, OrderId, PriceSnapshot, TaxRate, TicketView,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Payment state of an order. `Paid` and `Void` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Open,
    Paid,
    Void,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Open => "open",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Void => "void",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment status: {0:?}")]
pub struct UnknownPaymentStatus(pub String);

impl FromStr for PaymentStatus {
    type Err = UnknownPaymentStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(PaymentStatus::Open),
            "paid" => Ok(PaymentStatus::Paid),
            "void" => Ok(PaymentStatus::Void),
            _ => Err(UnknownPaymentStatus(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderLineItem>,
    pub subtotal_cents: Cents,
    pub tax_cents: Cents,
    pub tip_cents: Cents,
    pub total_cents: Cents,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn line_item(&self, id: LineItemId) -> Option<&OrderLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Kitchen view of one of this order's line items.
    pub fn ticket(&self, item: &OrderLineItem) -> TicketView {
        TicketView {
            line_item_id: item.id,
            order_id: self.id,
            menu_item_id: item.menu_item_id,
            item_name: item.item_name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            note: item.note.clone(),
            kitchen_status: item.kitchen_status,
            order_created_at: self.created_at,
            item_created_at: item.created_at,
            bumped_at: item.bumped_at,
        }
    }
}

/// One ordered quantity of a menu item. Price, name and category are copies
/// taken when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub id: LineItemId,
    pub order_id: OrderId,
    pub menu_item_id: MenuItemId,
    pub item_name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price_cents: Cents,
    pub note: Option<String>,
    pub kitchen_status: KitchenStatus,
    pub created_at: DateTime<Utc>,
    /// When the item last left the active board. Cleared if it is sent back.
    #[serde(default)]
    pub bumped_at: Option<DateTime<Utc>>,
}

impl OrderLineItem {
    /// Moves the item to `status`. Leaving the board stamps `bumped_at`;
    /// moving between finished states keeps the first stamp.
    pub fn set_kitchen_status(&mut self, status: KitchenStatus, at: DateTime<Utc>) {
        if status.is_active() {
            self.bumped_at = None;
        } else if self.kitchen_status.is_active() || self.bumped_at.is_none() {
            self.bumped_at = Some(at);
        }
        self.kitchen_status = status;
    }
}

/// A requested line as it arrives from the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRequest {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
    #[serde(default)]
    pub note: Option<String>,
}

impl LineItemRequest {
    pub fn new(menu_item_id: MenuItemId, quantity: u32) -> Self {
        Self {
            menu_item_id,
            quantity,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Trimmed note; blank notes are dropped.
    pub fn normalized_note(&self) -> Option<String> {
        self.note
            .as_deref()
            .map(str::trim)
            .filter(|note| !note.is_empty())
            .map(str::to_string)
    }
}

/// Boundary payload for placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<LineItemRequest>,
    #[serde(default)]
    pub tip_cents: Cents,
}

/// Payload handed to the ledger once prices are resolved.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub lines: Vec<LineItemRequest>,
    pub prices: PriceSnapshot,
    pub tip_cents: Cents,
}

/// Derived money fields of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal_cents: Cents,
    pub tax_cents: Cents,
    pub tip_cents: Cents,
    pub total_cents: Cents,
}

impl OrderTotals {
    /// Sums `(unit price, quantity)` pairs, applies tax and adds the tip.
    ///
    /// Returns `None` if any step overflows.
    pub fn compute(
        lines: impl IntoIterator<Item = (Cents, u32)>,
        tax_rate: TaxRate,
        tip_cents: Cents,
    ) -> Option<Self> {
        let subtotal_cents = lines.into_iter().try_fold(0u64, |acc, (price, qty)| {
            price
                .checked_mul(u64::from(qty))
                .and_then(|line| acc.checked_add(line))
        })?;
        let tax_cents = tax_rate.tax_on(subtotal_cents)?;
        let total_cents = subtotal_cents
            .checked_add(tax_cents)?
            .checked_add(tip_cents)?;
        Some(Self {
            subtotal_cents,
            tax_cents,
            tip_cents,
            total_cents,
        })
    }
}
