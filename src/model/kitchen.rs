//! Kitchen preparation status and the ticket view shown on kitchen displays.

use crate::model::{LineItemId, MenuItemId, OrderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Preparation state of a single line item.
///
/// Any status may be set from any other. Only `Queued` and `Prepping`
/// appear on the active board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KitchenStatus {
    Queued,
    Prepping,
    Ready,
    Served,
}

impl KitchenStatus {
    pub const ALL: [KitchenStatus; 4] = [
        KitchenStatus::Queued,
        KitchenStatus::Prepping,
        KitchenStatus::Ready,
        KitchenStatus::Served,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KitchenStatus::Queued => "queued",
            KitchenStatus::Prepping => "prepping",
            KitchenStatus::Ready => "ready",
            KitchenStatus::Served => "served",
        }
    }

    /// Whether the kitchen still has work to do on the item.
    pub fn is_active(self) -> bool {
        matches!(self, KitchenStatus::Queued | KitchenStatus::Prepping)
    }
}

impl Display for KitchenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown kitchen status: {0:?}")]
pub struct UnknownKitchenStatus(pub String);

impl FromStr for KitchenStatus {
    type Err = UnknownKitchenStatus;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        KitchenStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| UnknownKitchenStatus(raw.to_string()))
    }
}

/// Kitchen-facing projection of a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketView {
    pub line_item_id: LineItemId,
    pub order_id: OrderId,
    pub menu_item_id: MenuItemId,
    pub item_name: String,
    pub category: String,
    pub quantity: u32,
    pub note: Option<String>,
    pub kitchen_status: KitchenStatus,
    pub order_created_at: DateTime<Utc>,
    pub item_created_at: DateTime<Utc>,
    pub bumped_at: Option<DateTime<Utc>>,
}
