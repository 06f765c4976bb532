//! Engine error types

use thiserror::Error;

/// Errors that can occur while orchestrating a validation run.
///
/// Domain inconsistencies are never errors here; they surface as
/// [`ValidationIssue`](crate::ValidationIssue) values in the result.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The catalog listing could not be fetched from the storage collaborator
    #[error("Catalog error: {0}")]
    Catalog(String),
}
