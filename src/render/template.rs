//! Minimal placeholder expansion for page shells.
//!
//! Page shells are plain strings with `{{ ident }}` placeholders, filled
//! from an explicit [`Context`] built by the caller. There is no embedded
//! expression language: conditionals over record fields are ordinary Rust
//! control flow in the page renderers, and a placeholder not present in the
//! context is a fatal build error rather than a silently empty string.

use thiserror::Error;

/// Template expansion errors. Fatal for the page being rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("page `{page}`: unknown template field `{field}`")]
    UnknownField { page: String, field: String },

    #[error("page `{page}`: unterminated `{{{{` placeholder")]
    Unterminated { page: String },
}

/// Named values available to one page shell.
#[derive(Debug, Default)]
pub struct Context {
    values: Vec<(&'static str, String)>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value. Later bindings shadow earlier ones with the same name.
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.push((name, value.into()));
        self
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Expand all `{{ ident }}` placeholders in `template` from `ctx`.
///
/// `page` identifies the page being rendered and is included in errors.
pub fn expand(page: &str, template: &str, ctx: &Context) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            return Err(TemplateError::Unterminated {
                page: page.to_string(),
            });
        };

        let field = after[..end].trim();
        match ctx.get(field) {
            Some(value) => out.push_str(value),
            None => {
                return Err(TemplateError::UnknownField {
                    page: page.to_string(),
                    field: field.to_string(),
                });
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple() {
        let ctx = Context::new().set("title", "WEST Standard Names");
        let out = expand("index", "# {{ title }}\n", &ctx).unwrap();
        assert_eq!(out, "# WEST Standard Names\n");
    }

    #[test]
    fn test_expand_multiple_fields() {
        let ctx = Context::new().set("a", "1").set("b", "2");
        let out = expand("index", "{{ a }} + {{ b }} = {{a}}{{b}}", &ctx).unwrap();
        assert_eq!(out, "1 + 2 = 12");
    }

    #[test]
    fn test_expand_no_placeholders() {
        let out = expand("index", "static text", &Context::new()).unwrap();
        assert_eq!(out, "static text");
    }

    #[test]
    fn test_expand_unknown_field() {
        let ctx = Context::new().set("title", "x");
        let err = expand("tags/equilibrium", "{{ titel }}", &ctx).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownField {
                page: "tags/equilibrium".to_string(),
                field: "titel".to_string(),
            }
        );
    }

    #[test]
    fn test_expand_unterminated() {
        let err = expand("index", "count: {{ total_names", &Context::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::Unterminated {
                page: "index".to_string(),
            }
        );
    }

    #[test]
    fn test_expand_whitespace_in_placeholder() {
        let ctx = Context::new().set("n", "5");
        assert_eq!(expand("p", "{{n}} {{ n }} {{  n  }}", &ctx).unwrap(), "5 5 5");
    }

    #[test]
    fn test_context_later_binding_shadows() {
        let ctx = Context::new().set("n", "old").set("n", "new");
        assert_eq!(expand("p", "{{ n }}", &ctx).unwrap(), "new");
    }

    #[test]
    fn test_error_display_names_page_and_field() {
        let err = TemplateError::UnknownField {
            page: "index".to_string(),
            field: "total_pages".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("index"));
        assert!(display.contains("total_pages"));
    }
}
