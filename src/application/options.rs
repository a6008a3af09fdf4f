//! Lint options
//!
//! Engine configuration handed over by the CLI/config layer. Relative paths
//! are anchored on `base_dir`, which is normally the process working
//! directory.

use std::path::{Path, PathBuf};

use crate::domain::ports::{EntryKind, FileSystem};
use crate::domain::value_objects::{path, IgnorePatterns};
use crate::error::{HintError, HintResult};

/// Dependency root used when none is configured and recursion is on.
pub const DEFAULT_DEP_PATH: &str = "./components";

#[derive(Debug, Clone)]
pub struct LintOptions {
    /// Anchor for relative start, dependency and lookup paths
    pub base_dir: PathBuf,
    /// Recurse into resolved dependencies
    pub recursive: bool,
    /// Roots searched for external dependencies, in order
    pub dep_paths: Vec<PathBuf>,
    /// Roots probed only to hint where a missing local dependency lives
    pub lookup_paths: Vec<PathBuf>,
    /// Problems reached through external dependencies become warnings
    pub warn_on_deps: bool,
    /// List requiring components in version conflict findings
    pub verbose: bool,
    /// `scripts` assumed when a manifest omits the key
    pub default_scripts: Vec<String>,
    /// Components that are skipped entirely
    pub ignore: IgnorePatterns,
}

impl LintOptions {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            recursive: false,
            dep_paths: Vec::new(),
            lookup_paths: Vec::new(),
            warn_on_deps: false,
            verbose: false,
            default_scripts: Vec::new(),
            ignore: IgnorePatterns::empty(),
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_dep_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.dep_paths = paths;
        self
    }

    pub fn with_lookup_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.lookup_paths = paths;
        self
    }

    pub fn with_warn_on_deps(mut self, warn_on_deps: bool) -> Self {
        self.warn_on_deps = warn_on_deps;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_default_scripts(mut self, scripts: Vec<String>) -> Self {
        self.default_scripts = scripts;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnorePatterns) -> Self {
        self.ignore = ignore;
        self
    }

    /// Fill in `./components` as the dependency root when recursing without
    /// explicit dependency paths and that directory exists.
    pub fn with_default_dep_paths(mut self, fs: &dyn FileSystem) -> Self {
        if self.recursive
            && self.dep_paths.is_empty()
            && fs.is_dir(&self.resolve(Path::new(DEFAULT_DEP_PATH)))
        {
            self.dep_paths.push(PathBuf::from(DEFAULT_DEP_PATH));
        }
        self
    }

    /// Anchor a path on `base_dir`.
    pub fn resolve(&self, p: &Path) -> PathBuf {
        path::resolve(&self.base_dir, p)
    }

    /// Absolute dependency roots, in configured order.
    pub fn dep_roots(&self) -> Vec<PathBuf> {
        self.dep_paths.iter().map(|p| self.resolve(p)).collect()
    }

    /// Absolute lookup roots, in configured order.
    pub fn lookup_roots(&self) -> Vec<PathBuf> {
        self.lookup_paths.iter().map(|p| self.resolve(p)).collect()
    }

    /// Eagerly check that every dependency and lookup root is a directory.
    pub fn validate(&self, fs: &dyn FileSystem) -> HintResult<()> {
        for root in self.dep_roots().iter().chain(self.lookup_roots().iter()) {
            ensure_directory(fs, root)?;
        }
        Ok(())
    }

    /// Check that every start path is a directory.
    pub fn validate_start_paths<P: AsRef<Path>>(
        &self,
        fs: &dyn FileSystem,
        start_paths: &[P],
    ) -> HintResult<()> {
        if start_paths.is_empty() {
            return Err(HintError::NoStartPaths);
        }
        for p in start_paths {
            ensure_directory(fs, &self.resolve(p.as_ref()))?;
        }
        Ok(())
    }
}

/// Fail with `PathNotFound` / `NotADirectory` unless `path` is a directory.
pub fn ensure_directory(fs: &dyn FileSystem, path: &Path) -> HintResult<()> {
    match fs.kind(path) {
        Ok(EntryKind::Directory) => Ok(()),
        Ok(_) => Err(HintError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(_) => Err(HintError::PathNotFound {
            path: path.to_path_buf(),
        }),
    }
}
