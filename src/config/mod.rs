//! Configuration module for component-hint
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (COMPONENT_HINT_*)
//! 3. Project config (./.component-hint.toml)
//! 4. User config (<config dir>/component-hint/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{levenshtein, EnvVarError, EnvVarValidator};
pub use loader::{parse_with_warnings, split_path_list, user_config_path, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, LintConfig, OutputConfig, ReporterKind};
