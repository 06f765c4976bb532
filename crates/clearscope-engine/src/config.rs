//! Engine configuration
//!
//! Business policy encoded as data rather than branches: the trade-sequence
//! table, the coverage classification keywords, the quantity outlier
//! threshold and the score weights all live here. Adding a sequence or a
//! keyword never touches evaluator logic.

use clearscope_domain::CoverageType;
use serde::{Deserialize, Serialize};

/// A named trade sequence.
///
/// Once the trigger trade appears among a room's active items, every trade
/// in `trades` is expected in that room (the trigger itself is skipped when
/// checking for missing trades).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSequence {
    /// Display name ("Drywall")
    pub name: String,

    /// Trade code whose presence activates the sequence
    pub trigger: String,

    /// Full set of trade codes the sequence expects, trigger included
    pub trades: Vec<String>,
}

impl TradeSequence {
    /// Convenience constructor used by the default rule set.
    pub fn new(name: &str, trigger: &str, trades: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            trigger: trigger.to_string(),
            trades: trades.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Configuration for the validation rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Trade sequences checked per room
    pub trade_sequences: Vec<TradeSequence>,

    /// Structure keywords that classify a room as Coverage B, matched
    /// case-insensitively as substrings
    pub coverage_b_keywords: Vec<String>,

    /// Unit of measure screened for quantity outliers
    pub outlier_unit: String,

    /// Quantities above this, in `outlier_unit`, are flagged as likely
    /// entry errors
    pub outlier_threshold: f64,

    /// Score penalty per error
    pub error_weight: u32,

    /// Score penalty per warning
    pub warning_weight: u32,

    /// Score penalty per suggestion
    pub suggestion_weight: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            trade_sequences: vec![
                TradeSequence::new("Drywall", "DRY", &["DEM", "DRY", "PNT"]),
                TradeSequence::new("Flooring", "FLR", &["DEM", "FLR"]),
                TradeSequence::new("Mitigation", "MIT", &["MIT", "DEM"]),
            ],
            coverage_b_keywords: vec![
                "detach".to_string(),
                "garage".to_string(),
                "shed".to_string(),
                "fence".to_string(),
            ],
            outlier_unit: "SF".to_string(),
            outlier_threshold: 10_000.0,
            error_weight: 10,
            warning_weight: 3,
            suggestion_weight: 1,
        }
    }
}

impl RuleConfig {
    /// Expected coverage type for a structure label.
    pub fn classify_structure(&self, structure: &str) -> CoverageType {
        let structure = structure.to_lowercase();
        let detached = self
            .coverage_b_keywords
            .iter()
            .any(|keyword| structure.contains(&keyword.to_lowercase()));
        if detached {
            CoverageType::B
        } else {
            CoverageType::A
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_set() {
        let config = RuleConfig::default();
        assert_eq!(config.trade_sequences.len(), 3);
        assert_eq!(config.trade_sequences[0].trigger, "DRY");
        assert_eq!(config.error_weight, 10);
        assert_eq!(config.outlier_threshold, 10_000.0);
    }

    #[test]
    fn test_classify_structure() {
        let config = RuleConfig::default();
        assert_eq!(
            config.classify_structure("Main Dwelling"),
            CoverageType::A
        );
        assert_eq!(
            config.classify_structure("Detached Garage"),
            CoverageType::B
        );
        assert_eq!(config.classify_structure("TOOL SHED"), CoverageType::B);
        assert_eq!(config.classify_structure("Back fence"), CoverageType::B);
        assert_eq!(config.classify_structure("Second Floor"), CoverageType::A);
    }
}
