//! Damage observations recorded during the walkthrough

use serde::{Deserialize, Serialize};

/// Documented damage belonging to exactly one room.
///
/// `room_id` is a foreign key by convention only; consumers tolerate a
/// dangling reference and render the room as unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageObservation {
    /// Unique identifier
    pub id: String,

    /// Room the damage was observed in
    pub room_id: String,

    /// What was observed ("water staining on ceiling")
    pub description: String,
}

impl DamageObservation {
    /// Create an observation with a freshly minted UUIDv7 identifier.
    pub fn new(room_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            room_id: room_id.into(),
            description: description.into(),
        }
    }
}
