//! Path helpers
//!
//! Lexical path arithmetic used to resolve declared paths the way a shell
//! would: relative entries are anchored on a base directory and `.`/`..`
//! segments are folded without touching the filesystem.

use std::path::{Component, Path, PathBuf};

/// Anchor `path` on `base` (unless already absolute) and fold `.`/`..`.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Lexically normalize a path.
///
/// `..` never climbs above the root of an absolute path; for relative paths
/// leading `..` segments are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Path of `to` relative to `from`. Both should be absolute and normalized.
///
/// Falls back to `to` unchanged when the two paths share no root.
pub fn relative_to(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component<'_>> = from.components().collect();
    let to_components: Vec<Component<'_>> = to.components().collect();

    if from.first() != to_components.first() {
        return to.to_path_buf();
    }

    let shared = from
        .iter()
        .zip(to_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in shared..from.len() {
        out.push("..");
    }
    for component in &to_components[shared..] {
        out.push(component.as_os_str());
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
