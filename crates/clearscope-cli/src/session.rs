//! Session snapshot files exported by the field app.

use crate::error::Result;
use clearscope_domain::{DamageObservation, Room, ScopeItem};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A session export: the point-in-time inventory a validation run consumes.
///
/// Arrays the app never populated are simply absent from the JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFile {
    /// Session identifier carried through to the engine's call contract
    #[serde(default)]
    pub session_id: String,

    /// Room inventory
    #[serde(default)]
    pub rooms: Vec<Room>,

    /// Damage observations
    #[serde(default)]
    pub damages: Vec<DamageObservation>,

    /// Proposed scope of work
    #[serde(default)]
    pub scope_items: Vec<ScopeItem>,
}

impl SessionFile {
    /// Load a snapshot from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
