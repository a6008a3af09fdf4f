//! Component checks
//!
//! Each check inspects one loaded component and reports findings as plain
//! messages; the engine decides the channel. Checks that resolve
//! dependencies also hand back the edges to traverse.
//!
//! Post-stage checks run once after traversal, over state accumulated by
//! the per-component checks.

mod dependency_versions;
mod external_deps;
mod files_exist;
mod local_paths;

use std::path::{Path, PathBuf};

use crate::application::options::LintOptions;
use crate::application::versions::VersionRegistry;
use crate::domain::entities::{Component, Finding};
use crate::domain::ports::FileSystem;

pub use dependency_versions::DependencyVersionsCheck;
pub use external_deps::ExternalDepsCheck;
pub use files_exist::FilesExistCheck;
pub use local_paths::LocalPathsCheck;

/// State a check may read (and, for versions, write) while it runs.
pub struct CheckContext<'a> {
    pub fs: &'a dyn FileSystem,
    pub options: &'a LintOptions,
    pub versions: &'a mut VersionRegistry,
}

/// What one check produced for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Messages, recorded on the component's channel
    pub findings: Vec<String>,
    /// Resolved local dependency directories
    pub local: Vec<PathBuf>,
    /// Resolved external dependency directories
    pub external: Vec<PathBuf>,
}

impl CheckOutcome {
    pub fn merge(&mut self, other: CheckOutcome) {
        self.findings.extend(other.findings);
        self.local.extend(other.local);
        self.external.extend(other.external);
    }
}

pub trait ComponentCheck: Send + Sync {
    /// Short identifier used in debug logs.
    fn name(&self) -> &'static str;

    fn run(&self, component: &Component, ctx: &mut CheckContext<'_>) -> CheckOutcome;
}

/// Read-only view handed to post-stage checks.
pub struct PostStageContext<'a> {
    pub options: &'a LintOptions,
    pub versions: &'a VersionRegistry,
}

pub trait PostStageCheck: Send + Sync {
    fn name(&self) -> &'static str;

    /// Findings carry their own component and channel.
    fn run(&self, ctx: &PostStageContext<'_>) -> Vec<Finding>;
}

/// Per-component checks in the order they run.
pub fn default_checks() -> Vec<Box<dyn ComponentCheck>> {
    vec![
        Box::new(FilesExistCheck),
        Box::new(LocalPathsCheck),
        Box::new(ExternalDepsCheck),
    ]
}

pub fn default_post_stage_checks() -> Vec<Box<dyn PostStageCheck>> {
    vec![Box::new(DependencyVersionsCheck)]
}

/// Identity of a component directory: its canonical path, or the lexically
/// normalized path when it cannot be canonicalized.
pub fn component_identity(fs: &dyn FileSystem, dir: &Path) -> PathBuf {
    fs.canonicalize(dir)
        .unwrap_or_else(|_| crate::domain::value_objects::path::normalize(dir))
}
