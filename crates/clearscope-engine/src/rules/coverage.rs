//! Coverage assignment versus the room's structure.

use super::{Rule, RuleContext};
use crate::issue::{IssueCategory, ValidationIssue};
use clearscope_domain::CoverageType;

/// The room's structure implies a policy coverage bucket; a line declaring
/// a different one gets the lowest severity, as adjusters may override
/// coverage deliberately. Items whose room cannot be resolved, or that
/// declare no coverage, are skipped.
pub(crate) struct CoverageTypeConsistency;

impl Rule for CoverageTypeConsistency {
    fn name(&self) -> &'static str {
        "coverage_type_consistency"
    }

    fn evaluate(&self, cx: &RuleContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for item in cx.snapshot.active_items() {
            let room = match item.room_id.as_deref().and_then(|id| cx.snapshot.room(id)) {
                Some(room) => room,
                None => continue,
            };
            let declared = match item.coverage_type.as_deref() {
                Some(declared) => declared,
                None => continue,
            };

            let expected = cx.config.classify_structure(room.structure());
            if CoverageType::parse(declared) == Some(expected) {
                continue;
            }
            issues.push(ValidationIssue {
                room_id: Some(room.id.clone()),
                scope_item_id: Some(item.id.clone()),
                ..ValidationIssue::new(
                    IssueCategory::CoverageMismatch,
                    format!(
                        "\"{}\" in {} is coded Coverage {} but structure \"{}\" suggests Coverage {}",
                        item.description,
                        room.name,
                        declared,
                        room.structure(),
                        expected
                    ),
                )
            });
        }
        issues
    }
}
