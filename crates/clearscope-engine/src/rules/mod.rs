//! Rule evaluators
//!
//! Each rule is an independent stateless unit: a pure function of the
//! shared snapshot, the catalog index and the rule configuration. The
//! orchestrator runs the registry in order and concatenates the findings;
//! no rule sees another's output, so rules can be added or removed without
//! cross-contamination.

mod companions;
mod coverage;
mod duplicates;
mod missing_scope;
mod quantity;
mod trade_sequence;
mod unlinked_damage;

use crate::catalog::CatalogIndex;
use crate::config::RuleConfig;
use crate::issue::ValidationIssue;
use crate::snapshot::ScopeSnapshot;

/// Shared read-only inputs handed to every rule.
pub(crate) struct RuleContext<'a> {
    pub snapshot: &'a ScopeSnapshot<'a>,
    pub catalog: &'a CatalogIndex,
    pub config: &'a RuleConfig,
}

/// A single validation rule.
pub(crate) trait Rule {
    /// Stable rule name used in logs.
    fn name(&self) -> &'static str;

    /// Evaluate the rule against the snapshot, returning its findings.
    fn evaluate(&self, cx: &RuleContext<'_>) -> Vec<ValidationIssue>;
}

/// The full rule set, in the order findings are reported.
pub(crate) fn registry() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(missing_scope::MissingScopeForDamage),
        Box::new(unlinked_damage::UnlinkedDamage),
        Box::new(companions::MissingCompanionItem),
        Box::new(trade_sequence::TradeSequenceCompleteness),
        Box::new(quantity::QuantityReasonableness),
        Box::new(duplicates::DuplicateItem),
        Box::new(coverage::CoverageTypeConsistency),
    ]
}

#[cfg(test)]
pub(crate) mod testutil {
    use clearscope_domain::{DamageObservation, Room, ScopeItem};

    pub fn room(id: &str, name: &str) -> Room {
        Room {
            id: id.to_string(),
            ..Room::new(name)
        }
    }

    pub fn damage(room_id: &str, description: &str) -> DamageObservation {
        DamageObservation::new(room_id, description)
    }

    pub fn item(room_id: &str, description: &str) -> ScopeItem {
        ScopeItem {
            room_id: Some(room_id.to_string()),
            quantity: Some(1.0),
            unit: "EA".to_string(),
            ..ScopeItem::new(description)
        }
    }
}
