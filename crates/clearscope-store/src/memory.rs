//! In-memory catalog for fixtures and file-fed validation runs.

use crate::StoreError;
use clearscope_domain::traits::CatalogSource;
use clearscope_domain::CatalogEntry;
use std::fs;
use std::path::Path;

/// Parse a JSON catalog file: an array of catalog entries.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogEntry>, StoreError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Catalog held directly in memory.
///
/// Backs file-fed CLI runs and test fixtures; the listing is returned
/// as-is, with no persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: Vec<CatalogEntry>,
}

impl MemoryCatalog {
    /// Wrap an entry list.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a JSON catalog file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Ok(Self::new(load_catalog_file(path)?))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogSource for MemoryCatalog {
    type Error = StoreError;

    fn list_catalog_entries(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_catalog_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"code": "RC1", "description": "Remove carpet"}},
                {{
                    "code": "PNT-TX",
                    "description": "Texture-match paint",
                    "companionRules": {{"requires": ["DRY1/2"], "auto_adds": []}}
                }}
            ]"#
        )
        .unwrap();

        let catalog = MemoryCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let entries = catalog.list_catalog_entries().unwrap();
        assert_eq!(entries[1].required_companions(), ["DRY1/2".to_string()]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = MemoryCatalog::from_file("/no/such/catalog.json").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
