//! Repair-estimating catalog definitions

use serde::{Deserialize, Serialize};

/// Companion rules declared on a catalog entry.
///
/// `requires` lists codes that must co-occur with the entry within the same
/// room for the line to be self-consistent (texture-match paint requires a
/// drywall patch). `auto_adds` lists codes the estimating UI offers to add
/// alongside the entry; it is carried through storage but no validation
/// rule consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanionRules {
    /// Codes that must be present in the same room
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,

    /// Codes the UI offers to add alongside this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auto_adds: Vec<String>,
}

/// A billable line-item definition from the estimating catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Catalog code, unique within the catalog
    pub code: String,

    /// Human description of the line item
    pub description: String,

    /// Companion/dependency rules, if the catalog declares any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companion_rules: Option<CompanionRules>,
}

impl CatalogEntry {
    /// Create an entry with no companion rules.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            companion_rules: None,
        }
    }

    /// Codes required to co-occur with this entry in the same room.
    pub fn required_companions(&self) -> &[String] {
        self.companion_rules
            .as_ref()
            .map(|rules| rules.requires.as_slice())
            .unwrap_or(&[])
    }
}
