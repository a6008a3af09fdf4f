//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{HintError, HintResult};

use super::env_validator::{closest, parse_bool, EnvVarValidator, BOOL_VALUES};
use super::types::{Config, ReporterKind};

/// Project configuration file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".component-hint.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HintResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text; `path` is only used to label errors and warnings.
pub fn parse_with_warnings(content: &str, path: &Path) -> HintResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HintError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first file found wins as a whole; files are not merged. A file that
/// exists but does not parse is an error.
pub fn load_or_default(project_root: &Path) -> HintResult<(Config, Vec<ConfigWarning>)> {
    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];

    for candidate in candidates.into_iter().flatten() {
        if candidate.is_file() {
            debug!(file = %candidate.display(), "loading configuration");
            return load_with_warnings(&candidate);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// `<config dir>/component-hint/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("component-hint").join("config.toml"))
}

/// Apply environment variable overrides (COMPONENT_HINT_* prefix).
///
/// `lookup` returns the raw value of a variable; invalid values are logged
/// and leave the configuration untouched.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("COMPONENT_HINT_RECURSIVE") {
        if let Some(recursive) = env_bool("COMPONENT_HINT_RECURSIVE", &value) {
            config.lint.recursive = recursive;
        }
    }

    if let Some(value) = lookup("COMPONENT_HINT_WARN_ON_DEPS") {
        if let Some(warn_on_deps) = env_bool("COMPONENT_HINT_WARN_ON_DEPS", &value) {
            config.lint.warn_on_deps = warn_on_deps;
        }
    }

    // Colon separated, like the command line
    if let Some(value) = lookup("COMPONENT_HINT_DEP_PATHS") {
        config.lint.dep_paths = split_path_list(&value).into_iter().map(PathBuf::from).collect();
    }

    if let Some(value) = lookup("COMPONENT_HINT_LOOKUP_PATHS") {
        config.lint.lookup_paths = split_path_list(&value).into_iter().map(PathBuf::from).collect();
    }

    if let Some(value) = lookup("COMPONENT_HINT_REPORTER") {
        let validator = EnvVarValidator::new("COMPONENT_HINT_REPORTER", ReporterKind::NAMES);
        match validator.parse(&value, ReporterKind::parse) {
            Ok(reporter) => config.output.reporter = reporter,
            Err(err) => warn!("{}", err),
        }
    }

    config
}

/// Split a colon separated list, dropping empty entries.
pub fn split_path_list(value: &str) -> Vec<String> {
    value
        .split(':')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_bool(var_name: &str, value: &str) -> Option<bool> {
    match EnvVarValidator::new(var_name, BOOL_VALUES).parse(value, parse_bool) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "lint",
        "recursive",
        "dep_paths",
        "lookup_paths",
        "ignore_paths",
        "warn_on_deps",
        "default_scripts",
        "output",
        "reporter",
        "verbose",
        "quiet",
        "color",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
