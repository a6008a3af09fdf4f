//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::LintOptions;
use crate::domain::value_objects::{ConfigWarning, IgnorePatterns};
use crate::error::HintResult;

use super::loader;

/// Lint behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub recursive: bool,

    #[serde(default)]
    pub dep_paths: Vec<PathBuf>,

    #[serde(default)]
    pub lookup_paths: Vec<PathBuf>,

    /// Gitignore-style patterns of components to skip
    #[serde(default)]
    pub ignore_paths: Vec<String>,

    #[serde(default)]
    pub warn_on_deps: bool,

    /// Assumed `scripts` when a manifest omits the key
    #[serde(default)]
    pub default_scripts: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub reporter: ReporterKind,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub quiet: bool,

    #[serde(default)]
    pub color: ColorMode,
}

/// Output format of a run
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReporterKind {
    /// Grouped, human readable
    #[default]
    Default,
    /// NDJSON event stream
    Json,
    /// GitHub Actions annotations
    Github,
    /// No output, exit status only
    Null,
}

impl ReporterKind {
    pub const NAMES: &'static [&'static str] = &["default", "json", "github", "null"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" | "text" => Some(Self::Default),
            "json" => Some(Self::Json),
            "github" => Some(Self::Github),
            "null" | "devnull" | "none" => Some(Self::Null),
            _ => None,
        }
    }
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lint: LintConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HintResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> HintResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: &Path) -> HintResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (COMPONENT_HINT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |name| std::env::var(name).ok())
    }

    /// Engine options for a run anchored on `base_dir`.
    pub fn lint_options(&self, base_dir: &Path) -> HintResult<LintOptions> {
        let ignore = if self.lint.ignore_paths.is_empty() {
            IgnorePatterns::empty()
        } else {
            IgnorePatterns::from_patterns(base_dir, &self.lint.ignore_paths)?
        };

        Ok(LintOptions::new(base_dir.to_path_buf())
            .with_recursive(self.lint.recursive)
            .with_dep_paths(self.lint.dep_paths.clone())
            .with_lookup_paths(self.lint.lookup_paths.clone())
            .with_warn_on_deps(self.lint.warn_on_deps)
            .with_verbose(self.output.verbose)
            .with_default_scripts(self.lint.default_scripts.clone())
            .with_ignore(ignore))
    }
}
