//! Corpus loading from a directory of YAML definition files.
//!
//! Walks the names directory, parses one record per `.yml`/`.yaml` file and
//! populates a [`RecordStore`]. The record's category is the name of its
//! parent directory relative to the names root; it never comes from the YAML
//! body itself.
//!
//! Hidden directories (dotfiles) are skipped. Any unreadable or unparsable
//! file aborts the load; so does a duplicate name or an entry without one.

use crate::store::{LoadError, RecordStore, StandardNameRecord};
use serde::Deserialize;
use std::{ffi::OsStr, fs, path::Path};
use walkdir::{DirEntry, WalkDir};

/// Raw YAML entry as it appears on disk. Everything is optional at parse
/// time; the required `name` is checked afterwards so a missing key reports
/// as [`LoadError::MissingName`] rather than a generic parse failure.
/// Unknown extra fields are tolerated so corpora can carry their own
/// metadata without breaking the build.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: Option<String>,
    description: Option<String>,
    unit: Option<String>,
    kind: Option<String>,
    status: Option<String>,
    documentation: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Load all standard-name records under `names_dir` into a fresh store.
///
/// The walk is sorted so load order (and therefore every downstream
/// ordering) is reproducible across builds.
pub fn load_corpus(names_dir: &Path) -> Result<RecordStore, LoadError> {
    let mut store = RecordStore::new();

    let walker = WalkDir::new(names_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(names_dir).to_path_buf();
            LoadError::Io(path, e.into())
        })?;

        if !entry.file_type().is_file() || !is_yaml(entry.path()) {
            continue;
        }

        let record = load_entry(entry.path(), names_dir)?;
        store.insert(record)?;
    }

    Ok(store)
}

/// Parse a single YAML file into a record, resolving its category from the
/// parent directory.
fn load_entry(path: &Path, names_dir: &Path) -> Result<StandardNameRecord, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
    let raw: RawEntry =
        serde_yaml::from_str(&content).map_err(|e| LoadError::Yaml(path.to_path_buf(), e))?;

    let name = raw.name.filter(|n| !n.is_empty()).ok_or(LoadError::MissingName {
        path: path.to_path_buf(),
    })?;

    Ok(StandardNameRecord {
        name,
        description: raw.description,
        unit: raw.unit,
        kind: raw.kind,
        status: raw.status,
        documentation: raw.documentation,
        tags: raw.tags,
        category: category_of(path, names_dir),
        source: path.to_path_buf(),
    })
}

/// Category = parent directory name, relative to the names root.
/// Files placed directly in the root have no category.
fn category_of(path: &Path, names_dir: &Path) -> Option<String> {
    let parent = path.parent()?;
    if parent == names_dir {
        return None;
    }
    parent
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}

/// Check if a directory entry is hidden (starts with a dot).
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|s| s.starts_with('.'))
}

/// Check for a `.yml`/`.yaml` extension.
fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}

// ============================================================================
// Tests
// ============================================================================
