//! Orchestration of the rule set over one snapshot.

use crate::catalog::CatalogIndex;
use crate::config::RuleConfig;
use crate::error::EngineError;
use crate::rules::{self, RuleContext};
use crate::score::ValidationResult;
use crate::snapshot::ScopeSnapshot;
use clearscope_domain::traits::CatalogSource;
use clearscope_domain::{DamageObservation, Room, ScopeItem};

/// The validation engine entry point.
///
/// Holds the rule configuration; each [`validate`](Self::validate) call is
/// a pure function of the supplied snapshot plus a single catalog fetch.
pub struct ScopeValidator {
    config: RuleConfig,
}

impl ScopeValidator {
    /// Create a validator with the given rule configuration.
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Create a validator with the default business rule set.
    pub fn default_config() -> Self {
        Self::new(RuleConfig::default())
    }

    /// The active rule configuration.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Validate a proposed scope of work against the session snapshot.
    ///
    /// Fetches the catalog once from `store`, runs every rule in registry
    /// order, and folds the findings into a scored [`ValidationResult`].
    /// Rules run sequentially, so the issue list has a stable total order:
    /// category blocks in registry order, insertion order within a block.
    ///
    /// The session id is part of the call contract and is recorded on the
    /// run's log events; rules operate over the full supplied arrays.
    ///
    /// # Errors
    ///
    /// Fails only if the catalog fetch fails. Rules are pure in-memory
    /// computations and cannot fail; domain inconsistencies come back as
    /// issues in the result, never as errors.
    pub fn validate<S: CatalogSource>(
        &self,
        store: &S,
        session_id: &str,
        scope_items: &[ScopeItem],
        rooms: &[Room],
        damages: &[DamageObservation],
    ) -> Result<ValidationResult, EngineError>
    where
        S::Error: std::fmt::Display,
    {
        let entries = store
            .list_catalog_entries()
            .map_err(|e| EngineError::Catalog(e.to_string()))?;
        let catalog = CatalogIndex::from_entries(entries);

        let snapshot = ScopeSnapshot::new(rooms, damages, scope_items);
        let cx = RuleContext {
            snapshot: &snapshot,
            catalog: &catalog,
            config: &self.config,
        };

        let mut issues = Vec::new();
        for rule in rules::registry() {
            let findings = rule.evaluate(&cx);
            tracing::debug!(
                session = session_id,
                rule = rule.name(),
                findings = findings.len(),
                "rule evaluated"
            );
            issues.extend(findings);
        }

        let result = ValidationResult::from_issues(issues, &self.config);
        tracing::info!(
            session = session_id,
            valid = result.valid,
            score = result.score,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            suggestions = result.suggestions.len(),
            "scope validation complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueCategory;
    use clearscope_domain::{CatalogEntry, CompanionRules};

    // Catalog source over a fixed listing (no actual storage)
    struct MockCatalog {
        entries: Vec<CatalogEntry>,
    }

    impl CatalogSource for MockCatalog {
        type Error = String;

        fn list_catalog_entries(&self) -> Result<Vec<CatalogEntry>, Self::Error> {
            Ok(self.entries.clone())
        }
    }

    struct FailingCatalog;

    impl CatalogSource for FailingCatalog {
        type Error = String;

        fn list_catalog_entries(&self) -> Result<Vec<CatalogEntry>, Self::Error> {
            Err("connection reset".to_string())
        }
    }

    fn room(id: &str, name: &str) -> Room {
        Room {
            id: id.to_string(),
            ..Room::new(name)
        }
    }

    fn base_item(room_id: &str, description: &str) -> ScopeItem {
        ScopeItem {
            room_id: Some(room_id.to_string()),
            quantity: Some(10.0),
            unit: "EA".to_string(),
            ..ScopeItem::new(description)
        }
    }

    fn empty_catalog() -> MockCatalog {
        MockCatalog {
            entries: Vec::new(),
        }
    }

    #[test]
    fn test_catalog_failure_propagates() {
        let validator = ScopeValidator::default_config();
        let err = validator
            .validate(&FailingCatalog, "s-1", &[], &[], &[])
            .unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_empty_snapshot_is_valid_and_perfect() {
        let validator = ScopeValidator::default_config();
        let result = validator
            .validate(&empty_catalog(), "s-1", &[], &[], &[])
            .unwrap();
        assert!(result.valid);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_damaged_room_with_no_scope() {
        // One room, one damage, zero scope items
        let rooms = vec![room("r-1", "Living Room")];
        let damages = vec![DamageObservation::new("r-1", "water staining")];

        let validator = ScopeValidator::default_config();
        let result = validator
            .validate(&empty_catalog(), "s-1", &[], &rooms, &damages)
            .unwrap();

        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].category, IssueCategory::MissingScope);
        // The orphaned damage also draws an unlinked-damage warning
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].category, IssueCategory::UnlinkedDamage);
        assert_eq!(result.score, 87);
    }

    #[test]
    fn test_duplicate_lines_stay_valid() {
        // Two active "RC1" lines with the same room and activity
        let rooms = vec![room("r-1", "Bedroom")];
        let line = ScopeItem {
            catalog_code: Some("RC1".to_string()),
            activity_type: Some("+".to_string()),
            ..base_item("r-1", "Remove carpet")
        };
        let items = vec![line.clone(), ScopeItem {
            id: "s-2".to_string(),
            ..line
        }];

        let catalog = MockCatalog {
            entries: vec![CatalogEntry::new("RC1", "Remove carpet")],
        };
        let validator = ScopeValidator::default_config();
        let result = validator
            .validate(&catalog, "s-1", &items, &rooms, &[])
            .unwrap();

        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].category, IssueCategory::Duplicate);
        assert_eq!(result.score, 97);
    }

    #[test]
    fn test_coverage_mismatch_on_detached_structure() {
        let rooms = vec![Room {
            structure: Some("Detached Garage".to_string()),
            ..room("r-1", "Garage")
        }];
        let items = vec![ScopeItem {
            coverage_type: Some("A".to_string()),
            ..base_item("r-1", "Paint walls")
        }];

        let validator = ScopeValidator::default_config();
        let result = validator
            .validate(&empty_catalog(), "s-1", &items, &rooms, &[])
            .unwrap();

        assert!(result.valid);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(
            result.suggestions[0].category,
            IssueCategory::CoverageMismatch
        );
        assert_eq!(result.score, 99);
    }

    #[test]
    fn test_lone_drywall_trade() {
        let rooms = vec![room("r-1", "Den")];
        let items = vec![ScopeItem {
            trade_code: "DRY".to_string(),
            ..base_item("r-1", "Hang drywall")
        }];

        let validator = ScopeValidator::default_config();
        let result = validator
            .validate(&empty_catalog(), "s-1", &items, &rooms, &[])
            .unwrap();

        assert!(result.valid);
        assert_eq!(result.warnings.len(), 2);
        let codes: Vec<_> = result
            .warnings
            .iter()
            .map(|issue| issue.code.as_deref().unwrap())
            .collect();
        assert_eq!(codes, ["DEM", "PNT"]);
        assert_eq!(result.score, 94);
    }

    #[test]
    fn test_companion_error_clears_on_rerun_with_companion() {
        let rooms = vec![room("r-1", "Living Room")];
        let catalog = MockCatalog {
            entries: vec![
                CatalogEntry {
                    companion_rules: Some(CompanionRules {
                        requires: vec!["DRY1/2".to_string()],
                        auto_adds: Vec::new(),
                    }),
                    ..CatalogEntry::new("PNT-TX", "Texture-match paint")
                },
                CatalogEntry::new("DRY1/2", "1/2\" drywall patch"),
            ],
        };
        let paint = ScopeItem {
            catalog_code: Some("PNT-TX".to_string()),
            ..base_item("r-1", "Texture-match paint")
        };

        let validator = ScopeValidator::default_config();
        let first = validator
            .validate(&catalog, "s-1", &[paint.clone()], &rooms, &[])
            .unwrap();
        assert_eq!(first.errors.len(), 1);
        assert_eq!(first.errors[0].category, IssueCategory::MissingCompanion);

        let patch = ScopeItem {
            catalog_code: Some("DRY1/2".to_string()),
            ..base_item("r-1", "Patch drywall")
        };
        let second = validator
            .validate(&catalog, "s-1", &[paint, patch], &rooms, &[])
            .unwrap();
        assert!(second.valid);
        assert_eq!(second.errors.len(), 0);
    }

    #[test]
    fn test_issue_order_is_stable_across_categories() {
        // A snapshot tripping several rules at once: findings arrive in
        // registry order regardless of which entity triggered them.
        let rooms = vec![
            room("r-1", "Living Room"),
            Room {
                structure: Some("Tool Shed".to_string()),
                ..room("r-2", "Shed")
            },
        ];
        let damages = vec![DamageObservation::new("r-1", "water staining")];
        let items = vec![
            ScopeItem {
                trade_code: "FLR".to_string(),
                catalog_code: Some("FLR1".to_string()),
                quantity: None,
                ..base_item("r-2", "Replace flooring")
            },
            ScopeItem {
                coverage_type: Some("A".to_string()),
                catalog_code: Some("PNT1".to_string()),
                ..base_item("r-2", "Paint shed")
            },
        ];

        let validator = ScopeValidator::default_config();
        let result = validator
            .validate(&empty_catalog(), "s-1", &items, &rooms, &damages)
            .unwrap();

        let error_categories: Vec<_> =
            result.errors.iter().map(|issue| issue.category).collect();
        assert_eq!(
            error_categories,
            [IssueCategory::MissingScope, IssueCategory::InvalidQuantity]
        );
        let warning_categories: Vec<_> =
            result.warnings.iter().map(|issue| issue.category).collect();
        assert_eq!(
            warning_categories,
            [IssueCategory::UnlinkedDamage, IssueCategory::TradeSequence]
        );
        assert_eq!(result.suggestions.len(), 1);
    }
}
