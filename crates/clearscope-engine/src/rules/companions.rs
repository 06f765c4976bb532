//! Companion-item dependencies declared by the catalog.

use super::{Rule, RuleContext};
use crate::issue::{IssueCategory, ValidationIssue};
use std::collections::HashSet;

/// Encodes repair-trade dependency chains: a catalog entry may require
/// other codes in the same room (texture-match paint requires a drywall
/// patch). Items whose code the catalog does not know are skipped.
pub(crate) struct MissingCompanionItem;

impl Rule for MissingCompanionItem {
    fn name(&self) -> &'static str {
        "missing_companion_item"
    }

    fn evaluate(&self, cx: &RuleContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for (room_id, items) in cx.snapshot.active_by_room() {
            let present: HashSet<&str> = items
                .iter()
                .filter_map(|item| item.catalog_code.as_deref())
                .collect();

            for item in &items {
                let code = match item.catalog_code.as_deref() {
                    Some(code) => code,
                    None => continue,
                };
                let entry = match cx.catalog.get(code) {
                    Some(entry) => entry,
                    None => continue,
                };

                for required in entry.required_companions() {
                    if present.contains(required.as_str()) {
                        continue;
                    }
                    // Fall back to the bare code when the required code is
                    // itself unknown to the catalog.
                    let required_desc =
                        cx.catalog.description_for(required).unwrap_or(required);
                    issues.push(ValidationIssue {
                        room_id: room_id.map(str::to_string),
                        scope_item_id: Some(item.id.clone()),
                        code: Some(required.clone()),
                        ..ValidationIssue::new(
                            IssueCategory::MissingCompanion,
                            format!(
                                "\"{}\" in {} requires \"{}\", which is not in the scope",
                                item.description,
                                cx.snapshot.room_name(room_id),
                                required_desc
                            ),
                        )
                    });
                }
            }
        }
        issues
    }
}
