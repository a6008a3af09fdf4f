//! Error types for component-hint
//!
//! Uses `thiserror` for library errors. Validation problems found while
//! linting are never errors: they become findings. `HintError` is reserved
//! for failures that stop a run before traversal starts.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for component-hint operations
pub type HintResult<T> = Result<T, HintError>;

/// Main error type for component-hint operations
#[derive(Error, Debug)]
pub enum HintError {
    /// A configured start, dependency or lookup path is missing
    #[error("Path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// A configured start, dependency or lookup path is not a directory
    #[error("Path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// An ignore pattern could not be compiled
    #[error("invalid ignore pattern '{pattern}': {message}")]
    InvalidIgnorePattern { pattern: String, message: String },

    /// Nothing to lint
    #[error("You must provide a path to be checked")]
    NoStartPaths,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
