//! Trade sequences: a trigger trade implies prerequisite/follow-up trades.

use super::{Rule, RuleContext};
use crate::issue::{IssueCategory, ValidationIssue};
use std::collections::HashSet;

/// Certain trades imply surrounding work: drywall implies prior demolition
/// and subsequent paint. The sequence table lives in the rule configuration
/// and is checked per room; the trigger itself is never reported missing.
pub(crate) struct TradeSequenceCompleteness;

impl Rule for TradeSequenceCompleteness {
    fn name(&self) -> &'static str {
        "trade_sequence_completeness"
    }

    fn evaluate(&self, cx: &RuleContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for (room_id, items) in cx.snapshot.active_by_room() {
            let trades: HashSet<&str> = items
                .iter()
                .map(|item| item.trade_code.as_str())
                .filter(|trade| !trade.is_empty())
                .collect();

            for sequence in &cx.config.trade_sequences {
                if !trades.contains(sequence.trigger.as_str()) {
                    continue;
                }
                for trade in &sequence.trades {
                    if *trade == sequence.trigger || trades.contains(trade.as_str()) {
                        continue;
                    }
                    issues.push(ValidationIssue {
                        room_id: room_id.map(str::to_string),
                        code: Some(trade.clone()),
                        ..ValidationIssue::new(
                            IssueCategory::TradeSequence,
                            format!(
                                "{} work in {} usually includes {} ({} sequence)",
                                sequence.trigger,
                                cx.snapshot.room_name(room_id),
                                trade,
                                sequence.name
                            ),
                        )
                    });
                }
            }
        }
        issues
    }
}
