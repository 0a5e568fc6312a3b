//! Small text-formatting helpers shared by all page renderers.

// ============================================================================
// Tag Formatting
// ============================================================================

/// Render a tag list as inline code badges: `` `a`, `b` ``.
///
/// Order-preserving and duplicate-preserving; an empty list renders as the
/// literal `None`.
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return "None".to_string();
    }
    tags.iter()
        .map(|tag| format!("`{tag}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable label for a tag or category slug.
///
/// Separators (`-`, `_`) become spaces and each word is title-cased:
/// `"magnetic-diagnostics"` → `"Magnetic Diagnostics"`.
pub fn display_label(slug: &str) -> String {
    slug.replace(['-', '_'], " ")
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Table Cell Formatting
// ============================================================================

/// Escape a value for use inside a Markdown table cell.
///
/// Pipes are escaped and newlines collapsed to spaces so multi-line
/// descriptions stay on one table row.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Truncate a cell value to `limit` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so multibyte text never splits mid-char.
pub fn truncate_cell(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut = limit.saturating_sub(3);
    let mut out: String = text.chars().take(cut).collect();
    out.push_str("...");
    out
}

// ============================================================================
// Tests
// ============================================================================
