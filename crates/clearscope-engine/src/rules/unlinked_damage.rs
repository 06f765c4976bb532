//! Damage observations should be referenced by at least one scope item.

use super::{Rule, RuleContext};
use crate::issue::{IssueCategory, ValidationIssue};
use std::collections::HashSet;

/// Weaker than the missing-scope check: a damage may legitimately be
/// covered by a room-level line that is not individually linked, so an
/// unreferenced observation is advisory, not blocking.
pub(crate) struct UnlinkedDamage;

impl Rule for UnlinkedDamage {
    fn name(&self) -> &'static str {
        "unlinked_damage"
    }

    fn evaluate(&self, cx: &RuleContext<'_>) -> Vec<ValidationIssue> {
        let linked: HashSet<&str> = cx
            .snapshot
            .active_items()
            .filter_map(|item| item.damage_id.as_deref())
            .collect();

        let mut issues = Vec::new();
        for damage in cx.snapshot.damages {
            if linked.contains(damage.id.as_str()) {
                continue;
            }
            issues.push(ValidationIssue {
                room_id: Some(damage.room_id.clone()),
                ..ValidationIssue::new(
                    IssueCategory::UnlinkedDamage,
                    format!(
                        "Damage \"{}\" in {} is not linked to any scope item",
                        damage.description,
                        cx.snapshot.room_name(Some(damage.room_id.as_str()))
                    ),
                )
            });
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{damage, item, room};
    use super::*;
    use crate::catalog::CatalogIndex;
    use crate::config::RuleConfig;
    use crate::issue::Severity;
    use crate::snapshot::ScopeSnapshot;
    use clearscope_domain::ScopeItem;

    fn run(
        rooms: &[clearscope_domain::Room],
        damages: &[clearscope_domain::DamageObservation],
        items: &[ScopeItem],
    ) -> Vec<ValidationIssue> {
        let snapshot = ScopeSnapshot::new(rooms, damages, items);
        let catalog = CatalogIndex::default();
        let config = RuleConfig::default();
        UnlinkedDamage.evaluate(&RuleContext {
            snapshot: &snapshot,
            catalog: &catalog,
            config: &config,
        })
    }

    #[test]
    fn test_unlinked_damage_warns() {
        let rooms = vec![room("r-1", "Kitchen")];
        let damages = vec![damage("r-1", "scorched cabinet")];
        let items = vec![item("r-1", "Replace cabinet")];

        let issues = run(&rooms, &damages, &items);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("scorched cabinet"));
        assert!(issues[0].message.contains("Kitchen"));
    }

    #[test]
    fn test_linked_damage_passes() {
        let rooms = vec![room("r-1", "Kitchen")];
        let damages = vec![damage("r-1", "scorched cabinet")];
        let items = vec![ScopeItem {
            damage_id: Some(damages[0].id.clone()),
            ..item("r-1", "Replace cabinet")
        }];

        assert!(run(&rooms, &damages, &items).is_empty());
    }

    #[test]
    fn test_link_from_inactive_item_does_not_count() {
        let rooms = vec![room("r-1", "Kitchen")];
        let damages = vec![damage("r-1", "scorched cabinet")];
        let items = vec![ScopeItem {
            damage_id: Some(damages[0].id.clone()),
            status: "superseded".to_string(),
            ..item("r-1", "Replace cabinet")
        }];

        assert_eq!(run(&rooms, &damages, &items).len(), 1);
    }

    #[test]
    fn test_dangling_room_renders_unknown() {
        let damages = vec![damage("gone", "hail dents")];
        let issues = run(&[], &damages, &[]);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("unknown room"));
    }
}
