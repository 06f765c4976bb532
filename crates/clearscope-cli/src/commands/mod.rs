//! Command implementations.

pub mod catalog;
pub mod profile;
pub mod validate;

pub use self::catalog::execute_catalog;
pub use self::profile::execute_profile;
pub use self::validate::execute_validate;

use crate::config::Config;
use crate::error::{CliError, Result};
use std::path::PathBuf;

/// Resolve the catalog database path: an explicit flag wins, otherwise the
/// active profile must name one.
pub(crate) fn resolve_catalog_db(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    config
        .get_active_profile()?
        .catalog_db
        .clone()
        .ok_or(CliError::NoCatalog)
}
