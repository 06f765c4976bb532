//! Rooms and the coverage classification vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structure label assumed when an inspection leaves it blank.
pub const DEFAULT_STRUCTURE: &str = "Main Dwelling";

/// An inspected area of the insured risk.
///
/// Rooms are created on-device during the walkthrough. The `structure`
/// field records which building the room belongs to and drives coverage
/// classification: the main dwelling falls under Coverage A, detached
/// structures (garage, shed, fence) under Coverage B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique identifier
    pub id: String,

    /// Display name ("Living Room", "Garage Bay 2")
    pub name: String,

    /// Structure the room belongs to; absent means the main dwelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
}

impl Room {
    /// Create a room with a freshly minted UUIDv7 identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use clearscope_domain::Room;
    ///
    /// let room = Room::new("Living Room");
    /// assert_eq!(room.structure(), "Main Dwelling");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            name: name.into(),
            structure: None,
        }
    }

    /// The structure label, defaulting to [`DEFAULT_STRUCTURE`] when unset.
    pub fn structure(&self) -> &str {
        self.structure.as_deref().unwrap_or(DEFAULT_STRUCTURE)
    }
}

/// Insurance policy coverage bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageType {
    /// Coverage A - the main dwelling
    #[serde(rename = "A")]
    A,

    /// Coverage B - other/detached structures
    #[serde(rename = "B")]
    B,
}

impl CoverageType {
    /// String form as stored on scope items.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Parse the stored string form (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("a") {
            Some(Self::A)
        } else if s.eq_ignore_ascii_case("b") {
            Some(Self::B)
        } else {
            None
        }
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
