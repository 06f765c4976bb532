//! ClearScope Storage Layer
//!
//! Implements the [`CatalogSource`] collaborator: a SQLite-backed catalog
//! store plus an in-memory variant for fixtures and file-fed runs.
//!
//! # Architecture
//!
//! - SQLite for the estimating catalog, keyed on the catalog code with
//!   upsert semantics
//! - Companion rules persist as a JSON column
//!
//! # Examples
//!
//! ```no_run
//! use clearscope_store::SqliteCatalogStore;
//!
//! let store = SqliteCatalogStore::new("catalog.db").unwrap();
//! // Store is now ready for catalog operations
//! ```

#![warn(missing_docs)]

mod memory;

pub use memory::{load_catalog_file, MemoryCatalog};

use clearscope_domain::traits::CatalogSource;
use clearscope_domain::{CatalogEntry, CompanionRules};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O error reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog data
    #[error("Invalid catalog data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// SQLite-backed catalog store.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// store instance.
pub struct SqliteCatalogStore {
    conn: Connection,
}

impl SqliteCatalogStore {
    /// Open (or create) a catalog database at the given path.
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS catalog_entries (
                code TEXT PRIMARY KEY,
                description TEXT NOT NULL,
                companion_rules TEXT
            )",
        )?;
        Ok(())
    }

    /// Insert or replace an entry, keyed on its code.
    pub fn upsert_entry(&mut self, entry: &CatalogEntry) -> Result<(), StoreError> {
        let rules_json = entry
            .companion_rules
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        self.conn.execute(
            "INSERT INTO catalog_entries (code, description, companion_rules)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(code) DO UPDATE SET description = ?2, companion_rules = ?3",
            params![entry.code, entry.description, rules_json],
        )?;
        Ok(())
    }

    /// Bulk-load entries inside one transaction, e.g. from a catalog file.
    ///
    /// Returns the number of entries written.
    pub fn seed(&mut self, entries: &[CatalogEntry]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        for entry in entries {
            let rules_json = entry
                .companion_rules
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?;
            tx.execute(
                "INSERT INTO catalog_entries (code, description, companion_rules)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(code) DO UPDATE SET description = ?2, companion_rules = ?3",
                params![entry.code, entry.description, rules_json],
            )?;
        }
        tx.commit()?;
        Ok(entries.len())
    }

    /// Fetch a single entry by code.
    pub fn get_entry(&self, code: &str) -> Result<Option<CatalogEntry>, StoreError> {
        let row: Option<(String, String, Option<String>)> = self
            .conn
            .query_row(
                "SELECT code, description, companion_rules
                 FROM catalog_entries WHERE code = ?1",
                params![code],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;
        row.map(|(code, description, rules)| Self::entry_from_row(code, description, rules))
            .transpose()
    }

    /// Every entry, ordered by code.
    pub fn list_entries(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT code, description, companion_rules
             FROM catalog_entries ORDER BY code",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

        let mut entries = Vec::new();
        for row in rows {
            let (code, description, rules): (String, String, Option<String>) = row?;
            entries.push(Self::entry_from_row(code, description, rules)?);
        }
        Ok(entries)
    }

    fn entry_from_row(
        code: String,
        description: String,
        rules: Option<String>,
    ) -> Result<CatalogEntry, StoreError> {
        let companion_rules = match rules {
            Some(json) => Some(serde_json::from_str::<CompanionRules>(&json)?),
            None => None,
        };
        Ok(CatalogEntry {
            code,
            description,
            companion_rules,
        })
    }
}

impl CatalogSource for SqliteCatalogStore {
    type Error = StoreError;

    fn list_catalog_entries(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        self.list_entries()
    }
}
