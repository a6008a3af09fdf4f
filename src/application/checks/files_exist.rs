//! Declared asset files must exist relative to the component directory.

use std::path::Path;

use crate::domain::entities::{AssetCategory, Component};
use crate::domain::value_objects::path;

use super::{CheckContext, CheckOutcome, ComponentCheck};

pub struct FilesExistCheck;

impl ComponentCheck for FilesExistCheck {
    fn name(&self) -> &'static str {
        "files-exist"
    }

    fn run(&self, component: &Component, ctx: &mut CheckContext<'_>) -> CheckOutcome {
        let mut outcome = CheckOutcome::default();
        let manifest = component.manifest();

        for category in AssetCategory::ALL {
            for declared in manifest.declared_files(category, &ctx.options.default_scripts) {
                let full = path::resolve(component.path(), Path::new(declared));
                if !ctx.fs.exists(&full) {
                    outcome
                        .findings
                        .push(format!("\"{}\" file does not exist: {}", category, declared));
                }
            }
        }

        outcome
    }
}
