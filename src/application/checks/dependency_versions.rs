//! Version conflicts across the whole traversal.

use crate::domain::entities::Finding;
use crate::domain::value_objects::Channel;

use super::{PostStageCheck, PostStageContext};

pub struct DependencyVersionsCheck;

impl PostStageCheck for DependencyVersionsCheck {
    fn name(&self) -> &'static str {
        "dependency-versions"
    }

    fn run(&self, ctx: &PostStageContext<'_>) -> Vec<Finding> {
        let channel = Channel::for_dependencies(ctx.options.warn_on_deps);

        ctx.versions
            .conflicts()
            .map(|(dependency, requirements)| {
                let name = dependency
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dependency.display().to_string());

                let mut lines = vec![format!(
                    "Multiple versions of dependency \"{}\" are being required",
                    name
                )];
                for requirement in requirements {
                    lines.push(format!(
                        "- {}: {} instance(s)",
                        requirement.version,
                        requirement.required_by.len()
                    ));
                    if ctx.options.verbose {
                        lines.extend(
                            requirement
                                .required_by
                                .iter()
                                .map(|c| format!("  {}", c.display())),
                        );
                    }
                }

                Finding::new(dependency, channel, lines.join("\n"))
            })
            .collect()
    }
}
