//! Validate a session snapshot against the catalog.

use super::resolve_catalog_db;
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::SessionFile;
use clearscope_engine::{ScopeValidator, ValidationResult};
use clearscope_store::{MemoryCatalog, SqliteCatalogStore};

/// Run validation and print the result.
///
/// Returns the result so the caller can turn `valid` into an exit status.
pub fn execute_validate(
    args: ValidateArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<ValidationResult> {
    let session = SessionFile::load(&args.session)?;
    let validator = ScopeValidator::default_config();

    let result = if let Some(file) = &args.catalog_file {
        let catalog = MemoryCatalog::from_file(file)?;
        validator.validate(
            &catalog,
            &session.session_id,
            &session.scope_items,
            &session.rooms,
            &session.damages,
        )?
    } else {
        let db = resolve_catalog_db(args.catalog_db, config)?;
        let store = SqliteCatalogStore::new(db)?;
        validator.validate(
            &store,
            &session.session_id,
            &session.scope_items,
            &session.rooms,
            &session.damages,
        )?
    };

    println!("{}", formatter.format_result(&result)?);
    Ok(result)
}
