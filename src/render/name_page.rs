//! Per-name detail page rendering.
//!
//! A name page is a pure function of the requested name and the store.
//! An unknown name is expected (not an error) and renders the documented
//! fallback page instead of aborting the build.
//!
//! Name pages live under `names/`, so intra-site links climb one level.

use super::format::{display_label, escape_cell, format_tags};
use crate::store::{RecordStore, StandardNameRecord};

/// Fallback body for a name with no record in the store.
const NOT_FOUND: &str = "Standard name not found.";

/// Render the detail page for `name`, resolving it through the store.
pub fn render_name_page(name: &str, store: &RecordStore) -> String {
    let mut page = format!("# `{name}`\n\n");

    match store.lookup(name) {
        None => {
            page.push_str(NOT_FOUND);
            page.push('\n');
        }
        Some(record) => render_detail(&mut page, record),
    }

    page
}

/// Detail sections for a present record. Every optional field renders a
/// documented fallback rather than being skipped or failing.
fn render_detail(page: &mut String, record: &StandardNameRecord) {
    page.push_str(
        record
            .description
            .as_deref()
            .unwrap_or("No description available."),
    );
    page.push_str("\n\n");

    // Details table
    page.push_str("## Details\n\n");
    page.push_str("| Field | Value |\n");
    page.push_str("| --- | --- |\n");
    push_row(page, "Unit", &cell(record.unit.as_deref(), "Not specified"));
    push_row(page, "Kind", &cell(record.kind.as_deref(), "Unknown"));
    push_row(page, "Status", &cell(record.status.as_deref(), "Unknown"));
    push_row(page, "Tags", &format_tags(&record.tags));
    page.push('\n');

    // Documentation block
    page.push_str("## Documentation\n\n");
    page.push_str(
        record
            .documentation
            .as_deref()
            .map(str::trim_end)
            .unwrap_or("No detailed documentation available."),
    );
    page.push_str("\n\n");

    // Navigation: category link only when the record carries tags
    page.push_str("## Navigation\n\n");
    if let Some(tag) = record.primary_tag() {
        page.push_str(&format!(
            "- Category: [{}](../tags/{tag}.md)\n",
            display_label(tag)
        ));
    }
    page.push_str("- [All Names](../overview.md)\n");
}

fn push_row(page: &mut String, field: &str, value: &str) {
    page.push_str(&format!("| {field} | {value} |\n"));
}

/// Table-safe value with its documented fallback for an absent field.
fn cell(value: Option<&str>, fallback: &str) -> String {
    value.map(escape_cell).unwrap_or_else(|| fallback.to_string())
}

// ============================================================================
// Tests
// ============================================================================
