//! Local dependencies resolve against the component's own sub-paths.
//!
//! Declared `paths` must be directories. Each `local` name must live in
//! exactly one of them, and every usable sub-path must hold at least one
//! declared dependency.

use std::path::{Path, PathBuf};

use crate::domain::entities::Component;
use crate::domain::ports::{EntryKind, FileSystem};
use crate::domain::services::{resolve_in, Resolution};
use crate::domain::value_objects::path;

use super::{component_identity, CheckContext, CheckOutcome, ComponentCheck};

pub struct LocalPathsCheck;

impl ComponentCheck for LocalPathsCheck {
    fn name(&self) -> &'static str {
        "local-paths"
    }

    fn run(&self, component: &Component, ctx: &mut CheckContext<'_>) -> CheckOutcome {
        let fs = ctx.fs;
        let dir = component.path();
        let manifest = component.manifest();
        let mut outcome = CheckOutcome::default();

        let mut usable: Vec<&str> = Vec::new();
        for declared in &manifest.paths {
            match fs.kind(&path::resolve(dir, Path::new(declared))) {
                Ok(EntryKind::Directory) => usable.push(declared),
                Ok(_) => outcome
                    .findings
                    .push(format!("Path is not a directory: {}", declared)),
                Err(_) => outcome
                    .findings
                    .push(format!("Path does not exist: {}", declared)),
            }
        }

        let mut consumed = vec![false; usable.len()];
        for dep in &manifest.local {
            let resolution = resolve_in(usable.iter().enumerate(), |(slot, sub)| {
                let candidate = path::resolve(dir, &Path::new(sub).join(dep));
                fs.exists(&Component::manifest_path(&candidate))
                    .then(|| (slot, component_identity(fs, &candidate)))
            });

            match resolution {
                Resolution::Unique((slot, found)) => {
                    consumed[slot] = true;
                    outcome.local.push(found);
                }
                Resolution::NotFound => {
                    let mut lines = vec![format!(
                        "Could not find dep \"{}\" in any of the given paths",
                        dep
                    )];
                    for hint in lookup_hints(fs, &ctx.options.lookup_roots(), dep) {
                        lines.push(format!(
                            "Found it in Lookup Path \"{}\"",
                            path::relative_to(dir, &hint).display()
                        ));
                    }
                    outcome.findings.push(lines.join("\n"));
                }
                Resolution::Ambiguous(matches) => {
                    let mut lines = vec![format!(
                        "Found dependency \"{}\" in more than one path:",
                        dep
                    )];
                    for (slot, found) in &matches {
                        consumed[*slot] = true;
                        lines.push(found.display().to_string());
                    }
                    outcome.findings.push(lines.join("\n"));
                }
            }
        }

        let unused: Vec<&str> = usable
            .iter()
            .zip(&consumed)
            .filter(|(_, used)| !**used)
            .map(|(sub, _)| *sub)
            .collect();
        if !unused.is_empty() {
            let mut lines = vec!["Found unused component paths:".to_string()];
            lines.extend(unused.iter().map(|s| s.to_string()));
            outcome.findings.push(lines.join("\n"));
        }

        outcome
    }
}

/// Lookup roots that hold a component named `dep`.
fn lookup_hints(fs: &dyn FileSystem, roots: &[PathBuf], dep: &str) -> Vec<PathBuf> {
    roots
        .iter()
        .map(|root| root.join(dep))
        .filter(|candidate| fs.exists(&Component::manifest_path(candidate)))
        .map(|candidate| component_identity(fs, &candidate))
        .collect()
}
