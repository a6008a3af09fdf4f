//! Manifest loading
//!
//! Reads `component.json` through the FileSystem port. Failures are not
//! errors of the run: the engine turns them into a finding for the component.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{Component, Manifest};
use crate::domain::ports::{FileSystem, FsError};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Component JSON file does not exist: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Component JSON file could not be read: {}: {source}", path.display())]
    Unreadable { path: PathBuf, source: FsError },

    #[error("Component JSON file is not valid: {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load and parse the manifest of the component directory `dir`.
pub fn load_manifest(fs: &dyn FileSystem, dir: &Path) -> Result<Manifest, ManifestError> {
    let path = Component::manifest_path(dir);

    if !fs.exists(&path) {
        return Err(ManifestError::Missing { path });
    }

    let content = match fs.read(&path) {
        Ok(content) => content,
        Err(FsError::NotFound(_)) => return Err(ManifestError::Missing { path }),
        Err(source) => return Err(ManifestError::Unreadable { path, source }),
    };

    Manifest::from_json(&content).map_err(|source| ManifestError::Invalid { path, source })
}
