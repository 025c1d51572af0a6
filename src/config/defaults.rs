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
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn extension() -> String {
        "typ".into()
    }
}

// ============================================================================
// [trail] Section Defaults
// ============================================================================

pub mod trail {
    pub fn index() -> String {
        "index".into()
    }

    pub fn visit_command() -> Vec<String> {
        Vec::new()
    }
}
