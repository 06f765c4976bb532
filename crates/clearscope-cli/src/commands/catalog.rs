//! Catalog maintenance commands.

use super::resolve_catalog_db;
use crate::cli::{CatalogArgs, CatalogCommand};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use clearscope_store::{load_catalog_file, SqliteCatalogStore};

/// Seed or list the catalog database.
pub fn execute_catalog(args: CatalogArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    match args.command {
        CatalogCommand::Seed { file, catalog_db } => {
            let entries = load_catalog_file(&file)?;
            let db = resolve_catalog_db(catalog_db, config)?;
            let mut store = SqliteCatalogStore::new(db)?;
            let count = store.seed(&entries)?;
            println!("Seeded {} catalog entries", count);
        }
        CatalogCommand::List { catalog_db } => {
            let db = resolve_catalog_db(catalog_db, config)?;
            let store = SqliteCatalogStore::new(db)?;
            let entries = store.list_entries()?;
            println!("{}", formatter.format_catalog(&entries)?);
        }
    }
    Ok(())
}
