//! Overview page: complete listing of every name with its category.

use super::table::{TableOptions, standard_names_table};
use crate::store::RecordStore;

/// Render the root-level overview page.
pub fn render_overview_page(store: &RecordStore, description_limit: usize) -> String {
    let records: Vec<_> = store.records().iter().collect();
    let table = standard_names_table(
        &records,
        &TableOptions {
            link_prefix: "",
            show_category: true,
            description_limit,
        },
    );

    format!(
        "# All Standard Names\n\nComplete listing of every standard name in the corpus.\n\n{table}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StandardNameRecord;
    use std::path::PathBuf;

    #[test]
    fn test_overview_has_category_column() {
        let mut store = RecordStore::new();
        store
            .insert(StandardNameRecord {
                name: "q".to_string(),
                description: None,
                unit: None,
                kind: None,
                status: None,
                documentation: None,
                tags: vec!["equilibrium".to_string()],
                category: Some("core".to_string()),
                source: PathBuf::from("core/q.yml"),
            })
            .unwrap();

        let page = render_overview_page(&store, 80);
        assert!(page.starts_with("# All Standard Names\n"));
        assert!(page.contains("| Standard Name | Unit | Description | Category |"));
        assert!(page.contains("[Core](tags/equilibrium.md)"));
    }

    #[test]
    fn test_overview_empty_corpus() {
        let page = render_overview_page(&RecordStore::new(), 80);
        assert!(page.contains("No standard names found."));
    }
}
