//! Validation findings

use serde::Serialize;
use std::fmt;

/// Severity of a validation finding.
///
/// Callers are expected to block finalization on errors, surface warnings
/// as advisory, and treat suggestions as optional hints; the engine only
/// classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks finalization
    Error,

    /// Advisory
    Warning,

    /// Optional hint
    Suggestion,
}

impl Severity {
    /// String form used in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of a validation finding.
///
/// Categories are stable identifiers exported verbatim in serialized
/// results; downstream tooling keys on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// A room has documented damage but no scope items
    MissingScope,

    /// A damage observation is not referenced by any scope item
    UnlinkedDamage,

    /// A catalog-declared companion code is absent from the room
    MissingCompanion,

    /// A trade sequence is incomplete in a room
    TradeSequence,

    /// Quantity is absent, zero, or negative
    InvalidQuantity,

    /// Quantity is implausibly large for its unit
    QuantityOutlier,

    /// Two active lines share room, code, and activity
    Duplicate,

    /// Declared coverage disagrees with the room's structure
    CoverageMismatch,
}

impl IssueCategory {
    /// String form used in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingScope => "missing_scope",
            Self::UnlinkedDamage => "unlinked_damage",
            Self::MissingCompanion => "missing_companion",
            Self::TradeSequence => "trade_sequence",
            Self::InvalidQuantity => "invalid_quantity",
            Self::QuantityOutlier => "quantity_outlier",
            Self::Duplicate => "duplicate",
            Self::CoverageMismatch => "coverage_mismatch",
        }
    }

    /// Fixed severity of findings in this category.
    pub fn severity(self) -> Severity {
        match self {
            Self::MissingScope | Self::MissingCompanion | Self::InvalidQuantity => Severity::Error,
            Self::UnlinkedDamage
            | Self::TradeSequence
            | Self::QuantityOutlier
            | Self::Duplicate => Severity::Warning,
            Self::CoverageMismatch => Severity::Suggestion,
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable validation finding.
///
/// Entity references are optional: a finding may concern a whole room, a
/// single item, or a catalog code, and dangling references from the
/// snapshot are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Finding category
    pub category: IssueCategory,

    /// Severity, fixed per category
    pub severity: Severity,

    /// Human-readable explanation
    pub message: String,

    /// Room the finding concerns, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,

    /// Scope item the finding concerns, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_item_id: Option<String>,

    /// Catalog or trade code the finding concerns, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ValidationIssue {
    /// Create a finding with no entity references; attach them with struct
    /// update syntax.
    pub fn new(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            severity: category.severity(),
            message: message.into(),
            room_id: None,
            scope_item_id: None,
            code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_fixed_per_category() {
        assert_eq!(IssueCategory::MissingScope.severity(), Severity::Error);
        assert_eq!(IssueCategory::Duplicate.severity(), Severity::Warning);
        assert_eq!(
            IssueCategory::CoverageMismatch.severity(),
            Severity::Suggestion
        );

        let issue = ValidationIssue::new(IssueCategory::InvalidQuantity, "no quantity");
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn test_serializes_stable_identifiers() {
        let issue = ValidationIssue {
            room_id: Some("r-1".to_string()),
            ..ValidationIssue::new(IssueCategory::TradeSequence, "missing DEM")
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["category"], "trade_sequence");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["roomId"], "r-1");
        // Absent references are omitted, not null
        assert!(json.get("scopeItemId").is_none());
    }
}
