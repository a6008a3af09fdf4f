//! Component entity
//!
//! A component is a directory with a `component.json` manifest. Its canonical
//! absolute directory path is its identity.

use std::path::{Path, PathBuf};

use super::manifest::{Manifest, MANIFEST_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    path: PathBuf,
    manifest: Manifest,
}

impl Component {
    pub fn new(path: PathBuf, manifest: Manifest) -> Self {
        Self { path, manifest }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Location of the manifest file for a component directory.
    pub fn manifest_path(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILE)
    }
}
