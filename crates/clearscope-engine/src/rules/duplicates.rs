//! Duplicate line detection by (room, catalog code, activity).

use super::{Rule, RuleContext};
use crate::issue::{IssueCategory, ValidationIssue};
use std::collections::HashSet;

/// Flags the second and later active lines sharing a room, catalog code and
/// activity, in iteration order; the first occurrence never triggers.
pub(crate) struct DuplicateItem;

impl Rule for DuplicateItem {
    fn name(&self) -> &'static str {
        "duplicate_item"
    }

    fn evaluate(&self, cx: &RuleContext<'_>) -> Vec<ValidationIssue> {
        let mut seen: HashSet<(Option<&str>, Option<&str>, Option<&str>)> = HashSet::new();
        let mut issues = Vec::new();
        for item in cx.snapshot.active_items() {
            let key = (
                item.room_id.as_deref(),
                item.catalog_code.as_deref(),
                item.activity_type.as_deref(),
            );
            if seen.insert(key) {
                continue;
            }
            issues.push(ValidationIssue {
                room_id: item.room_id.clone(),
                scope_item_id: Some(item.id.clone()),
                code: item.catalog_code.clone(),
                ..ValidationIssue::new(
                    IssueCategory::Duplicate,
                    format!(
                        "\"{}\" duplicates an earlier line in {} (same catalog code and activity)",
                        item.description,
                        cx.snapshot.room_name(item.room_id.as_deref())
                    ),
                )
            });
        }
        issues
    }
}
