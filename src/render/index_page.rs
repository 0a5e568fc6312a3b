//! Index page rendering: summary counts and per-tag navigation.

use super::{
    format::display_label,
    template::{Context, TemplateError, expand},
};
use crate::stats::AggregateStats;

/// Page shell for the corpus index.
const INDEX_SHELL: &str = "\
# {{ title }}

Browsable documentation for {{ total_names }} standard names across \
{{ total_categories }} categories and {{ total_tags }} tags.

See the [complete listing](overview.md) of all names.

## Browse by Tag

{{ tag_nav }}

---

{{ footer }}
";

/// Render the index page from the aggregate view.
///
/// `dd_version` is an opaque data-dictionary identifier stamped into the
/// footer when present; `generated` is the build date.
pub fn render_index_page(
    stats: &AggregateStats,
    title: &str,
    dd_version: Option<&str>,
    generated: &str,
) -> Result<String, TemplateError> {
    let tag_nav = if stats.total_tags() == 0 {
        "No tags defined.".to_string()
    } else {
        stats
            .groups()
            .iter()
            .map(|g| format!("- [{}](tags/{}.md)", display_label(&g.tag), g.tag))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let footer = match dd_version {
        Some(version) => format!("DD version `{version}` · Generated on {generated}"),
        None => format!("Generated on {generated}"),
    };

    let ctx = Context::new()
        .set("title", title)
        .set("total_names", stats.total_names().to_string())
        .set("total_categories", stats.total_categories().to_string())
        .set("total_tags", stats.total_tags().to_string())
        .set("tag_nav", tag_nav)
        .set("footer", footer);

    expand("index", INDEX_SHELL, &ctx)
}

// ============================================================================
// Tests
// ============================================================================
