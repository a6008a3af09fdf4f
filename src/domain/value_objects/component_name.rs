//! Component name normalization
//!
//! External dependencies are declared by registry name (`owner/name`) but
//! installed as a single directory level (`owner-name`).

/// Collapse path separators in a dependency name into a directory-safe form.
pub fn normalize_component_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect()
}
