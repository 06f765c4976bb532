//! Quantity sanity: present, positive, and not a unit-entry outlier.

use super::{Rule, RuleContext};
use crate::issue::{IssueCategory, ValidationIssue};

/// Two independent checks per active item: a missing/zero/negative quantity
/// is an error, and a square-foot quantity beyond the configured threshold
/// is advisory (it usually signals a unit or entry mistake rather than a
/// true measurement).
pub(crate) struct QuantityReasonableness;

impl Rule for QuantityReasonableness {
    fn name(&self) -> &'static str {
        "quantity_reasonableness"
    }

    fn evaluate(&self, cx: &RuleContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for item in cx.snapshot.active_items() {
            match item.quantity {
                None => issues.push(ValidationIssue {
                    room_id: item.room_id.clone(),
                    scope_item_id: Some(item.id.clone()),
                    ..ValidationIssue::new(
                        IssueCategory::InvalidQuantity,
                        format!("\"{}\" has no quantity", item.description),
                    )
                }),
                Some(quantity) if quantity <= 0.0 => issues.push(ValidationIssue {
                    room_id: item.room_id.clone(),
                    scope_item_id: Some(item.id.clone()),
                    ..ValidationIssue::new(
                        IssueCategory::InvalidQuantity,
                        format!(
                            "\"{}\" has non-positive quantity {}",
                            item.description, quantity
                        ),
                    )
                }),
                Some(_) => {}
            }

            if item.unit == cx.config.outlier_unit {
                if let Some(quantity) = item.quantity {
                    if quantity > cx.config.outlier_threshold {
                        issues.push(ValidationIssue {
                            room_id: item.room_id.clone(),
                            scope_item_id: Some(item.id.clone()),
                            ..ValidationIssue::new(
                                IssueCategory::QuantityOutlier,
                                format!(
                                    "\"{}\" measures {} {}, likely a unit or entry error",
                                    item.description, quantity, item.unit
                                ),
                            )
                        });
                    }
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::item;
    use super::*;
    use crate::catalog::CatalogIndex;
    use crate::config::RuleConfig;
    use crate::issue::Severity;
    use crate::snapshot::ScopeSnapshot;
    use clearscope_domain::ScopeItem;

    fn run(items: &[ScopeItem]) -> Vec<ValidationIssue> {
        let snapshot = ScopeSnapshot::new(&[], &[], items);
        let catalog = CatalogIndex::default();
        let config = RuleConfig::default();
        QuantityReasonableness.evaluate(&RuleContext {
            snapshot: &snapshot,
            catalog: &catalog,
            config: &config,
        })
    }

    fn with_quantity(quantity: Option<f64>, unit: &str) -> ScopeItem {
        ScopeItem {
            quantity,
            unit: unit.to_string(),
            ..item("r-1", "Replace drywall")
        }
    }

    #[test]
    fn test_missing_zero_and_negative_quantities_error() {
        for bad in [None, Some(0.0), Some(-12.5)] {
            let issues = run(&[with_quantity(bad, "SF")]);
            assert_eq!(issues.len(), 1, "quantity {:?}", bad);
            assert_eq!(issues[0].category, IssueCategory::InvalidQuantity);
            assert_eq!(issues[0].severity, Severity::Error);
        }
    }

    #[test]
    fn test_reasonable_quantity_passes() {
        assert!(run(&[with_quantity(Some(240.0), "SF")]).is_empty());
    }

    #[test]
    fn test_square_foot_outlier_warns() {
        let issues = run(&[with_quantity(Some(12_000.0), "SF")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::QuantityOutlier);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_outlier_screen_only_applies_to_configured_unit() {
        assert!(run(&[with_quantity(Some(12_000.0), "LF")]).is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(run(&[with_quantity(Some(10_000.0), "SF")]).is_empty());
    }

    #[test]
    fn test_inactive_items_ignored() {
        let items = vec![ScopeItem {
            status: "removed".to_string(),
            ..with_quantity(None, "SF")
        }];
        assert!(run(&items).is_empty());
    }
}
