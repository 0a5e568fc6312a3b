//! Markdown table rendering for record listings.
//!
//! Used by the overview page (with a Category column) and by per-tag pages
//! (without one). Rows are sorted by name regardless of load order.

use super::format::{display_label, escape_cell, truncate_cell};
use crate::store::StandardNameRecord;

/// Rendering options for one table.
pub struct TableOptions<'a> {
    /// Relative path prefix from the page to the output root
    /// (`""` for root-level pages, `"../"` for pages in a subdirectory).
    pub link_prefix: &'a str,

    /// Append a Category column linking to each record's primary tag page.
    pub show_category: bool,

    /// Maximum description length before truncation.
    pub description_limit: usize,
}

/// Render a listing of records as a Markdown table, sorted by name.
pub fn standard_names_table(records: &[&StandardNameRecord], opts: &TableOptions) -> String {
    if records.is_empty() {
        return "No standard names found.".to_string();
    }

    let mut sorted: Vec<&StandardNameRecord> = records.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut table = String::with_capacity(sorted.len() * 96);
    if opts.show_category {
        table.push_str("| Standard Name | Unit | Description | Category |\n");
        table.push_str("| --- | --- | --- | --- |\n");
    } else {
        table.push_str("| Standard Name | Unit | Description |\n");
        table.push_str("| --- | --- | --- |\n");
    }

    for record in sorted {
        let name_link = format!(
            "[`{}`]({}names/{}.md)",
            record.name, opts.link_prefix, record.name
        );
        let unit = record.unit.as_deref().unwrap_or("-");
        let description = record
            .description
            .as_deref()
            .map(|d| truncate_cell(&escape_cell(d), opts.description_limit))
            .unwrap_or_else(|| "No description".to_string());

        table.push_str(&format!("| {name_link} | {unit} | {description} |"));

        if opts.show_category {
            table.push_str(&format!(" {} |", category_cell(record, opts.link_prefix)));
        }
        table.push('\n');
    }

    table
}

/// Category cell: display label linked to the record's primary tag page.
///
/// Falls back to the category slug as link target when the record has no
/// tags, and to a plain "Unknown" when it has neither.
fn category_cell(record: &StandardNameRecord, link_prefix: &str) -> String {
    let label = record
        .category
        .as_deref()
        .map(display_label)
        .unwrap_or_else(|| "Unknown".to_string());

    let target = record.primary_tag().or(record.category.as_deref());
    match target {
        Some(tag) => format!("[{label}]({link_prefix}tags/{tag}.md)"),
        None => label,
    }
}

// ============================================================================
// Tests
// ============================================================================
