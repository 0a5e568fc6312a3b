//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Standard Names".into()
    }

    pub fn dd_version() -> Option<String> {
        None
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn names() -> PathBuf {
        "standard_names".into()
    }

    pub fn output() -> PathBuf {
        "docs".into()
    }

    pub fn description_limit() -> usize {
        80
    }
}
