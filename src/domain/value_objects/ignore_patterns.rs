//! Ignore patterns value object
//!
//! Matches component directories against `--ignore-paths` patterns using
//! gitignore semantics. Ignored components are never loaded or checked.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};

use crate::error::{HintError, HintResult};

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Compiled set of ignore patterns anchored on a base directory.
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    root: PathBuf,
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            root: PathBuf::new(),
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Compile patterns relative to `root`.
    ///
    /// Blank entries and `#` comments are skipped, so the same list can come
    /// from the command line or from a config file.
    pub fn from_patterns<S: AsRef<str>>(root: &Path, patterns: &[S]) -> HintResult<Self> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for pattern in patterns {
            let trimmed = pattern.as_ref().trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(HintError::InvalidIgnorePattern {
                    pattern: trimmed.to_string(),
                    message: format!("more than {} ignore patterns", MAX_PATTERNS),
                });
            }

            builder
                .add_line(None, trimmed)
                .map_err(|e| HintError::InvalidIgnorePattern {
                    pattern: trimmed.to_string(),
                    message: e.to_string(),
                })?;
        }

        let matcher = builder
            .build()
            .map_err(|e| HintError::InvalidIgnorePattern {
                pattern: String::new(),
                message: e.to_string(),
            })?;

        Ok(Self {
            root: root.to_path_buf(),
            matcher,
            pattern_count,
        })
    }

    /// Check if a component directory should be skipped.
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.pattern_count == 0 {
            return false;
        }

        match path.strip_prefix(&self.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => self
                .matcher
                .matched_path_or_any_parents(rel, true)
                .is_ignore(),
            Ok(_) => false,
            Err(_) => self.matcher.matched(path, true).is_ignore(),
        }
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}
