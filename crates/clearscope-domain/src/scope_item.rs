//! Scope items - proposed repair work lines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a scope item.
///
/// Only active items participate in validation; removed or superseded lines
/// are kept for history and are invisible to every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// Part of the current scope of work
    Active,

    /// Soft-deleted by the adjuster
    Removed,

    /// Replaced by a newer line
    Superseded,
}

impl ItemStatus {
    /// String form as stored on the item.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Removed => "removed",
            Self::Superseded => "superseded",
        }
    }

    /// Parse the stored string form (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("active") {
            Some(Self::Active)
        } else if s.eq_ignore_ascii_case("removed") {
            Some(Self::Removed)
        } else if s.eq_ignore_ascii_case("superseded") {
            Some(Self::Superseded)
        } else {
            None
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single line of proposed repair work.
///
/// Most references are optional: an item may be room-level rather than tied
/// to a specific damage, may be free-typed without a catalog code, and may
/// leave coverage assignment to a later pass. Dangling references are
/// tolerated downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeItem {
    /// Unique identifier
    pub id: String,

    /// Room the work applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,

    /// Damage observation this line addresses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_id: Option<String>,

    /// Estimating-catalog code ("DRY1/2", "PNT-TX")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_code: Option<String>,

    /// Human description of the work
    pub description: String,

    /// Measured quantity; absent when not yet entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Unit of measure ("SF", "LF", "EA")
    #[serde(default)]
    pub unit: String,

    /// Construction trade code ("DRY", "PNT", "DEM")
    #[serde(default)]
    pub trade_code: String,

    /// Declared policy coverage bucket ("A" or "B")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_type: Option<String>,

    /// Catalog activity ("+" add, "-" remove, "&" reset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,

    /// Lifecycle status; anything but "active" is invisible to validation
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    ItemStatus::Active.as_str().to_string()
}

impl ScopeItem {
    /// Create an active item with a freshly minted UUIDv7 identifier.
    ///
    /// Optional fields start empty; fill them with struct update syntax.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            room_id: None,
            damage_id: None,
            catalog_code: None,
            description: description.into(),
            quantity: None,
            unit: String::new(),
            trade_code: String::new(),
            coverage_type: None,
            activity_type: None,
            status: default_status(),
        }
    }

    /// Whether this item participates in validation.
    pub fn is_active(&self) -> bool {
        ItemStatus::parse(&self.status) == Some(ItemStatus::Active)
    }
}
