//! External dependencies resolve against the configured dependency roots.
//!
//! A resolved dependency also registers the requested version so conflicts
//! can be reported once traversal is done.

use crate::domain::entities::Component;
use crate::domain::services::{resolve_in, Resolution};
use crate::domain::value_objects::normalize_component_name;

use super::{component_identity, CheckContext, CheckOutcome, ComponentCheck};

pub struct ExternalDepsCheck;

impl ComponentCheck for ExternalDepsCheck {
    fn name(&self) -> &'static str {
        "external-deps"
    }

    fn run(&self, component: &Component, ctx: &mut CheckContext<'_>) -> CheckOutcome {
        let fs = ctx.fs;
        let roots = ctx.options.dep_roots();
        let mut outcome = CheckOutcome::default();

        for dep in component.manifest().dependencies.iter() {
            let normalized = normalize_component_name(&dep.name);
            let resolution = resolve_in(&roots, |root| {
                let candidate = root.join(&normalized);
                fs.is_dir(&candidate)
                    .then(|| component_identity(fs, &candidate))
            });

            match resolution {
                Resolution::NotFound => outcome.findings.push(format!(
                    "Could not find dependency \"{}\" in any of the dependency paths",
                    dep.name
                )),
                Resolution::Ambiguous(matches) => {
                    let mut lines = vec![format!(
                        "Found dependency \"{}\" in more than one of the dependency paths",
                        dep.name
                    )];
                    lines.extend(matches.iter().map(|p| p.display().to_string()));
                    outcome.findings.push(lines.join("\n"));
                }
                Resolution::Unique(found) if found == component.path() => outcome
                    .findings
                    .push(format!("\"{}\" contains itself as a dependency", dep.name)),
                Resolution::Unique(found) => {
                    ctx.versions.register(&found, &dep.version, component.path());
                    outcome.external.push(found);
                }
            }
        }

        outcome
    }
}
