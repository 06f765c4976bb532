//! ClearScope Scope Consistency Validation Engine
//!
//! Checks a proposed repair scope of work against the room inventory, the
//! recorded damage observations, and the estimating catalog before the
//! scope is finalized and exported.
//!
//! The engine provides:
//! - Seven independent rule evaluators (missing scope, unlinked damage,
//!   companion items, trade sequences, quantities, duplicates, coverage)
//! - A completeness score aggregated from issue severities (0-100)
//! - A single orchestration entry point over a catalog source
//!
//! Rules never fail and never mutate: every domain inconsistency surfaces
//! as a [`ValidationIssue`] at one of three severities, and "invalid" is a
//! result value, not an exceptional control path. The only operation that
//! can fail is the catalog fetch.
//!
//! # Examples
//!
//! ```no_run
//! use clearscope_engine::{RuleConfig, ScopeValidator};
//!
//! let validator = ScopeValidator::new(RuleConfig::default());
//!
//! // Validate a session snapshot before export
//! // let result = validator.validate(&store, session_id, &items, &rooms, &damages)?;
//! ```

#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod issue;
mod rules;
mod score;
mod snapshot;
mod validator;

pub use catalog::CatalogIndex;
pub use config::{RuleConfig, TradeSequence};
pub use error::EngineError;
pub use issue::{IssueCategory, Severity, ValidationIssue};
pub use score::ValidationResult;
pub use validator::ScopeValidator;
