//! Reusable manifest content.

/// A manifest declaring nothing at all.
pub const EMPTY_MANIFEST: &str = "{}";

/// A component with one script that must exist next to it.
pub const SCRIPT_MANIFEST: &str = r#"{"scripts": ["index.js"]}"#;

/// Build a manifest with local dependencies resolved through `paths`.
pub fn local_manifest(paths: &[&str], local: &[&str]) -> String {
    serde_json::json!({ "paths": paths, "local": local }).to_string()
}

/// Build a manifest with external dependencies.
pub fn external_manifest(dependencies: &[(&str, &str)]) -> String {
    let deps: serde_json::Map<String, serde_json::Value> = dependencies
        .iter()
        .map(|(name, version)| (name.to_string(), serde_json::json!(version)))
        .collect();
    serde_json::json!({ "dependencies": deps }).to_string()
}
