//! Completeness scoring

use crate::config::RuleConfig;
use crate::issue::{Severity, ValidationIssue};
use serde::Serialize;

/// Outcome of a validation run.
///
/// `valid` tracks only error-severity findings; the score is an independent
/// quality signal. A scope can be valid yet score below 100 because of
/// warnings and suggestions, and an invalid scope can still score above
/// zero.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff no error-severity findings exist
    pub valid: bool,

    /// Completeness score, clamped to 0-100
    pub score: u8,

    /// Blocking findings
    pub errors: Vec<ValidationIssue>,

    /// Advisory findings
    pub warnings: Vec<ValidationIssue>,

    /// Optional hints
    pub suggestions: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Partition findings by severity and derive score and validity.
    ///
    /// The score starts at 100 and loses the configured weight per finding;
    /// within each severity the original insertion order is preserved.
    pub fn from_issues(issues: Vec<ValidationIssue>, config: &RuleConfig) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();
        for issue in issues {
            match issue.severity {
                Severity::Error => errors.push(issue),
                Severity::Warning => warnings.push(issue),
                Severity::Suggestion => suggestions.push(issue),
            }
        }

        let penalty = errors.len() as u64 * u64::from(config.error_weight)
            + warnings.len() as u64 * u64::from(config.warning_weight)
            + suggestions.len() as u64 * u64::from(config.suggestion_weight);
        let score = 100u64.saturating_sub(penalty) as u8;

        Self {
            valid: errors.is_empty(),
            score,
            errors,
            warnings,
            suggestions,
        }
    }

    /// Total number of findings across severities.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.suggestions.len()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::issue::IssueCategory;
    use proptest::prelude::*;

    fn issues(errors: usize, warnings: usize, suggestions: usize) -> Vec<ValidationIssue> {
        let mut all = Vec::new();
        for _ in 0..errors {
            all.push(ValidationIssue::new(IssueCategory::MissingScope, "e"));
        }
        for _ in 0..warnings {
            all.push(ValidationIssue::new(IssueCategory::TradeSequence, "w"));
        }
        for _ in 0..suggestions {
            all.push(ValidationIssue::new(IssueCategory::CoverageMismatch, "s"));
        }
        all
    }

    proptest! {
        /// Property: score stays within [0, 100] for any issue mix
        #[test]
        fn test_score_bounded(e in 0usize..60, w in 0usize..60, s in 0usize..60) {
            let result = ValidationResult::from_issues(issues(e, w, s), &RuleConfig::default());
            prop_assert!(result.score <= 100);
            prop_assert_eq!(result.valid, e == 0);
        }

        /// Property: adding a finding of any severity never raises the score
        #[test]
        fn test_score_monotone(e in 0usize..30, w in 0usize..30, s in 0usize..30) {
            let config = RuleConfig::default();
            let base = ValidationResult::from_issues(issues(e, w, s), &config).score;
            for (de, dw, ds) in [(1, 0, 0), (0, 1, 0), (0, 0, 1)] {
                let bumped =
                    ValidationResult::from_issues(issues(e + de, w + dw, s + ds), &config).score;
                prop_assert!(bumped <= base);
            }
        }
    }
}
