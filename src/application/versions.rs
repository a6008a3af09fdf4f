//! Version registry
//!
//! Records which version of each resolved external dependency every
//! component asked for. Written during traversal, read by post-stage checks.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One version specifier and the components that required it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRequirement {
    pub version: String,
    /// Requiring components, in observation order
    pub required_by: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct VersionRegistry {
    entries: BTreeMap<PathBuf, Vec<VersionRequirement>>,
}

impl VersionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `component` requires `dependency` at `version`.
    pub fn register(&mut self, dependency: &Path, version: &str, component: &Path) {
        let requirements = self.entries.entry(dependency.to_path_buf()).or_default();
        match requirements.iter_mut().find(|r| r.version == version) {
            Some(existing) => existing.required_by.push(component.to_path_buf()),
            None => requirements.push(VersionRequirement {
                version: version.to_string(),
                required_by: vec![component.to_path_buf()],
            }),
        }
    }

    pub fn get(&self, dependency: &Path) -> Option<&[VersionRequirement]> {
        self.entries.get(dependency).map(Vec::as_slice)
    }

    /// All dependencies in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[VersionRequirement])> {
        self.entries
            .iter()
            .map(|(path, reqs)| (path.as_path(), reqs.as_slice()))
    }

    /// Dependencies required at more than one distinct version.
    pub fn conflicts(&self) -> impl Iterator<Item = (&Path, &[VersionRequirement])> {
        self.iter().filter(|(_, reqs)| reqs.len() > 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
