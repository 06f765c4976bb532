//! Catalog index - O(1) code lookup over the fetched listing

use clearscope_domain::CatalogEntry;
use std::collections::HashMap;

/// In-memory lookup from catalog code to its entry.
///
/// Built once per validation run from the full listing. Codes are unique in
/// a well-formed catalog; on a duplicate the later entry wins.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    entries: HashMap<String, CatalogEntry>,
}

impl CatalogIndex {
    /// Build the index from a full catalog listing.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            map.insert(entry.code.clone(), entry);
        }
        Self { entries: map }
    }

    /// Look up an entry by code.
    pub fn get(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.get(code)
    }

    /// Human description for a code, if the catalog knows it.
    pub fn description_for(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(|entry| entry.description.as_str())
    }

    /// Number of indexed codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog listing was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let index = CatalogIndex::from_entries(vec![
            CatalogEntry::new("RC1", "Remove carpet"),
            CatalogEntry::new("PNT", "Paint walls"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.description_for("RC1"), Some("Remove carpet"));
        assert_eq!(index.get("XXX"), None);
    }

    #[test]
    fn test_duplicate_codes_last_write_wins() {
        let index = CatalogIndex::from_entries(vec![
            CatalogEntry::new("RC1", "Old description"),
            CatalogEntry::new("RC1", "New description"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.description_for("RC1"), Some("New description"));
    }
}
