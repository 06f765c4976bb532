//! Every room with documented damage needs at least one active scope item.

use super::{Rule, RuleContext};
use crate::issue::{IssueCategory, ValidationIssue};

/// Documented damage must translate into billable repair work; a room with
/// observations but no lines signals an incomplete workflow step. One
/// finding per room, not per damage.
pub(crate) struct MissingScopeForDamage;

impl Rule for MissingScopeForDamage {
    fn name(&self) -> &'static str {
        "missing_scope_for_damage"
    }

    fn evaluate(&self, cx: &RuleContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for room in cx.snapshot.rooms {
            let damage_count = cx
                .snapshot
                .damages
                .iter()
                .filter(|damage| damage.room_id == room.id)
                .count();
            if damage_count == 0 {
                continue;
            }

            let has_scope = cx
                .snapshot
                .active_items()
                .any(|item| item.room_id.as_deref() == Some(room.id.as_str()));
            if !has_scope {
                issues.push(ValidationIssue {
                    room_id: Some(room.id.clone()),
                    ..ValidationIssue::new(
                        IssueCategory::MissingScope,
                        format!(
                            "{} has {} documented damage observation(s) but no scope items",
                            room.name, damage_count
                        ),
                    )
                });
            }
        }
        issues
    }
}
