//! Per-tag category page rendering.
//!
//! One page per tag group, listing every record carrying that tag. Tag
//! pages live under `tags/`, so listing links climb one level.

use super::{
    format::display_label,
    table::{TableOptions, standard_names_table},
    template::{Context, TemplateError, expand},
};
use crate::{stats::TagGroup, store::RecordStore};

/// Page shell for a tag category page.
const TAG_PAGE_SHELL: &str = "\
# {{ label }}

This category contains standard names related to {{ label_lower }}.

{{ table }}
";

/// Render the category page for one tag group.
pub fn render_tag_page(
    group: &TagGroup,
    store: &RecordStore,
    description_limit: usize,
) -> Result<String, TemplateError> {
    let members: Vec<_> = group
        .members
        .iter()
        .map(|&i| &store.records()[i])
        .collect();

    let table = standard_names_table(
        &members,
        &TableOptions {
            link_prefix: "../",
            show_category: false,
            description_limit,
        },
    );

    let label = display_label(&group.tag);
    let ctx = Context::new()
        .set("label_lower", label.to_lowercase())
        .set("label", label)
        .set("table", table);

    expand(&format!("tags/{}", group.tag), TAG_PAGE_SHELL, &ctx)
}

// ============================================================================
// Tests
// ============================================================================
