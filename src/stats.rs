//! Corpus aggregation: per-tag groupings and summary counts.
//!
//! [`AggregateStats`] is a derived, recomputable view over a loaded
//! [`RecordStore`]. It is computed once per build in a single pass and is
//! read-only afterwards, like the store itself.

use crate::store::RecordStore;
use rustc_hash::{FxHashMap, FxHashSet};

/// Records carrying one tag, in record load order.
#[derive(Debug)]
pub struct TagGroup {
    /// The tag string exactly as declared in the corpus.
    pub tag: String,

    /// Indices into [`RecordStore::records`], in load order.
    pub members: Vec<usize>,
}

/// Summary view over the whole corpus.
///
/// Tag groups keep first-seen order: the order tags are first encountered
/// while iterating records in load order. A record with N distinct tags
/// appears in N groups; repeating a tag within one record's own list does
/// not double-count it.
#[derive(Debug, Default)]
pub struct AggregateStats {
    groups: Vec<TagGroup>,
    group_index: FxHashMap<String, usize>,
    categories: Vec<String>,
    total_names: usize,
}

impl AggregateStats {
    /// Compute stats from the full record set in one pass.
    ///
    /// Cannot fail; an empty store yields empty groupings.
    pub fn collect(store: &RecordStore) -> Self {
        let mut stats = Self {
            total_names: store.len(),
            ..Self::default()
        };
        let mut seen_categories: FxHashSet<&str> = FxHashSet::default();

        for (idx, record) in store.records().iter().enumerate() {
            // De-duplicate tags within this record only
            let mut seen_tags: FxHashSet<&str> = FxHashSet::default();
            for tag in &record.tags {
                if !seen_tags.insert(tag.as_str()) {
                    continue;
                }
                let group = match stats.group_index.get(tag.as_str()).copied() {
                    Some(g) => g,
                    None => {
                        stats.group_index.insert(tag.clone(), stats.groups.len());
                        stats.groups.push(TagGroup {
                            tag: tag.clone(),
                            members: Vec::new(),
                        });
                        stats.groups.len() - 1
                    }
                };
                stats.groups[group].members.push(idx);
            }

            if let Some(category) = record.category.as_deref()
                && seen_categories.insert(category)
            {
                stats.categories.push(category.to_string());
            }
        }

        stats
    }

    /// Number of loaded records.
    pub fn total_names(&self) -> usize {
        self.total_names
    }

    /// Number of distinct categories across the corpus.
    pub fn total_categories(&self) -> usize {
        self.categories.len()
    }

    /// Number of distinct tags across the corpus.
    pub fn total_tags(&self) -> usize {
        self.groups.len()
    }

    /// All tag groups in first-seen order.
    pub fn groups(&self) -> &[TagGroup] {
        &self.groups
    }

    /// Look up one tag's group.
    pub fn group(&self, tag: &str) -> Option<&TagGroup> {
        self.group_index.get(tag).map(|&g| &self.groups[g])
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StandardNameRecord;
    use std::path::PathBuf;

    fn make_record(name: &str, tags: &[&str], category: Option<&str>) -> StandardNameRecord {
        StandardNameRecord {
            name: name.to_string(),
            description: None,
            unit: None,
            kind: None,
            status: None,
            documentation: None,
            tags: tags.iter().map(ToString::to_string).collect(),
            category: category.map(ToString::to_string),
            source: PathBuf::from(format!("standard_names/{name}.yml")),
        }
    }

    fn store_of(records: Vec<StandardNameRecord>) -> RecordStore {
        let mut store = RecordStore::new();
        for record in records {
            store.insert(record).unwrap();
        }
        store
    }

    #[test]
    fn test_empty_store() {
        let stats = AggregateStats::collect(&RecordStore::new());
        assert_eq!(stats.total_names(), 0);
        assert_eq!(stats.total_tags(), 0);
        assert_eq!(stats.total_categories(), 0);
        assert!(stats.groups().is_empty());
    }

    #[test]
    fn test_counts() {
        let store = store_of(vec![
            make_record("a", &["equilibrium"], Some("core")),
            make_record("b", &["equilibrium", "magnetics"], Some("core")),
            make_record("c", &[], Some("edge")),
        ]);
        let stats = AggregateStats::collect(&store);

        assert_eq!(stats.total_names(), 3);
        assert_eq!(stats.total_tags(), 2);
        assert_eq!(stats.total_categories(), 2);
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let store = store_of(vec![
            make_record("a", &["zeta", "alpha"], None),
            make_record("b", &["midway"], None),
        ]);
        let stats = AggregateStats::collect(&store);

        let tags: Vec<_> = stats.groups().iter().map(|g| g.tag.as_str()).collect();
        assert_eq!(tags, vec!["zeta", "alpha", "midway"]);
    }

    #[test]
    fn test_members_keep_load_order() {
        let store = store_of(vec![
            make_record("later_name", &["shared"], None),
            make_record("earlier_name", &["shared"], None),
        ]);
        let stats = AggregateStats::collect(&store);

        let group = stats.group("shared").unwrap();
        let members: Vec<_> = group
            .members
            .iter()
            .map(|&i| store.records()[i].name.as_str())
            .collect();
        // Load order, not alphabetical
        assert_eq!(members, vec!["later_name", "earlier_name"]);
    }

    #[test]
    fn test_repeated_tag_within_record_counted_once() {
        let store = store_of(vec![make_record("a", &["plasma", "plasma"], None)]);
        let stats = AggregateStats::collect(&store);

        assert_eq!(stats.total_tags(), 1);
        assert_eq!(stats.group("plasma").unwrap().members.len(), 1);
    }

    #[test]
    fn test_membership_sum_equals_distinct_tag_sum() {
        let store = store_of(vec![
            make_record("a", &["x", "y", "x"], None), // 2 distinct
            make_record("b", &["y"], None),           // 1
            make_record("c", &[], None),              // 0
        ]);
        let stats = AggregateStats::collect(&store);

        let membership: usize = stats.groups().iter().map(|g| g.members.len()).sum();
        assert_eq!(membership, 3);
    }

    #[test]
    fn test_group_lookup() {
        let store = store_of(vec![make_record("a", &["equilibrium"], None)]);
        let stats = AggregateStats::collect(&store);

        assert!(stats.group("equilibrium").is_some());
        assert!(stats.group("transport").is_none());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let store = store_of(vec![
            make_record("a", &[], Some("edge")),
            make_record("b", &[], Some("core")),
            make_record("c", &[], Some("edge")),
            make_record("d", &[], None),
        ]);
        let stats = AggregateStats::collect(&store);

        assert_eq!(stats.categories(), &["edge".to_string(), "core".to_string()]);
        assert_eq!(stats.total_categories(), 2);
    }
}
