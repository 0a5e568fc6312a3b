//! In-memory store for standard-name records.
//!
//! The store is populated once at build start and treated as read-only for
//! the remainder of the build. Records keep their load order; lookups are
//! exact-match on the unique `name` key.

use rustc_hash::FxHashMap;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Corpus loading errors. All variants are fatal and abort the build.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("duplicate standard name `{name}` in `{path}` (first defined in `{previous}`)")]
    DuplicateName {
        name: String,
        path: PathBuf,
        previous: PathBuf,
    },

    #[error("entry in `{path}` is missing the required `name` field")]
    MissingName { path: PathBuf },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("YAML parsing error in `{0}`")]
    Yaml(PathBuf, #[source] serde_yaml::Error),
}

// ============================================================================
// Record Type
// ============================================================================

/// One standard-name definition.
///
/// Only `name` is required; every other field renders with a documented
/// fallback when absent. `tags` keep declaration order since the first tag
/// is the record's primary navigational category.
#[derive(Debug, Clone)]
pub struct StandardNameRecord {
    /// Unique identifier, stable across the corpus (primary key).
    pub name: String,

    /// Short one-line description.
    pub description: Option<String>,

    /// Physical unit (e.g., "m", "T", "W.m^-2").
    pub unit: Option<String>,

    /// Quantity classification (e.g., "scalar", "profile").
    pub kind: Option<String>,

    /// Lifecycle marker (e.g., "active", "draft", "deprecated").
    pub status: Option<String>,

    /// Long-form explanatory text.
    pub documentation: Option<String>,

    /// Navigational tags in declaration order; first is primary.
    pub tags: Vec<String>,

    /// Coarse grouping derived from the record's storage location.
    /// Supplied by the loader, never read from the YAML body.
    pub category: Option<String>,

    /// Source file the record was loaded from (for error reporting).
    pub source: PathBuf,
}

impl StandardNameRecord {
    /// Primary navigational tag, when any tags are declared.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

// ============================================================================
// Record Store
// ============================================================================

/// Holds all loaded records, keyed by name.
///
/// Records iterate in load order. Name uniqueness is enforced on insert;
/// a collision reports both source files.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<StandardNameRecord>,
    by_name: FxHashMap<String, usize>,
}

impl RecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, rejecting duplicate names.
    pub fn insert(&mut self, record: StandardNameRecord) -> Result<(), LoadError> {
        if let Some(&prev) = self.by_name.get(&record.name) {
            return Err(LoadError::DuplicateName {
                name: record.name,
                path: record.source,
                previous: self.records[prev].source.clone(),
            });
        }
        self.by_name.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Resolve a name to its record. Unknown names are expected, not errors.
    pub fn lookup(&self, name: &str) -> Option<&StandardNameRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// All records in load order.
    pub fn records(&self) -> &[StandardNameRecord] {
        &self.records
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store has any records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, tags: &[&str]) -> StandardNameRecord {
        StandardNameRecord {
            name: name.to_string(),
            description: None,
            unit: None,
            kind: None,
            status: None,
            documentation: None,
            tags: tags.iter().map(ToString::to_string).collect(),
            category: None,
            source: PathBuf::from(format!("standard_names/{name}.yml")),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = RecordStore::new();
        store.insert(make_record("electron_temperature", &["plasma"])).unwrap();
        store.insert(make_record("toroidal_field", &["equilibrium"])).unwrap();

        let found = store.lookup("electron_temperature").unwrap();
        assert_eq!(found.name, "electron_temperature");
        assert_eq!(found.primary_tag(), Some("plasma"));

        assert!(store.lookup("ion_temperature").is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let mut store = RecordStore::new();
        store.insert(make_record("electron_temperature", &[])).unwrap();

        assert!(store.lookup("Electron_Temperature").is_none());
        assert!(store.lookup("electron_temperatur").is_none());
        assert!(store.lookup("").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut store = RecordStore::new();
        let mut first = make_record("plasma_current", &[]);
        first.source = PathBuf::from("standard_names/equilibrium/plasma_current.yml");
        store.insert(first).unwrap();

        let mut second = make_record("plasma_current", &[]);
        second.source = PathBuf::from("standard_names/core/plasma_current.yml");
        let err = store.insert(second).unwrap_err();

        match err {
            LoadError::DuplicateName { name, path, previous } => {
                assert_eq!(name, "plasma_current");
                assert_eq!(path, PathBuf::from("standard_names/core/plasma_current.yml"));
                assert_eq!(
                    previous,
                    PathBuf::from("standard_names/equilibrium/plasma_current.yml")
                );
            }
            other => panic!("expected DuplicateName, got {other:?}"),
        }

        // Store keeps the first record
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.lookup("plasma_current").unwrap().source,
            PathBuf::from("standard_names/equilibrium/plasma_current.yml")
        );
    }

    #[test]
    fn test_records_keep_load_order() {
        let mut store = RecordStore::new();
        for name in ["c", "a", "b"] {
            store.insert(make_record(name, &[])).unwrap();
        }
        let names: Vec<_> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_primary_tag() {
        let record = make_record("foo", &["equilibrium", "magnetics"]);
        assert_eq!(record.primary_tag(), Some("equilibrium"));

        let untagged = make_record("bar", &[]);
        assert_eq!(untagged.primary_tag(), None);
    }
}
