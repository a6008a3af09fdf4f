//! Lint Use Case
//!
//! One full run: pre-flight validation, traversal of the start paths, then
//! the post stage. Pre-flight failures abort before anything is checked;
//! everything found afterwards ends up in the report.

use std::path::PathBuf;

use tracing::info;

use crate::application::engine::LintEngine;
use crate::application::findings::{FindingStore, LintSummary};
use crate::application::options::LintOptions;
use crate::domain::ports::{FileSystem, LintEvent, LintEventSink};
use crate::error::{HintError, HintResult};

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct LintReport {
    pub findings: FindingStore,
    pub summary: LintSummary,
}

impl LintReport {
    pub fn is_success(&self) -> bool {
        self.summary.is_success()
    }
}

pub struct LintUseCase<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> LintUseCase<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    pub fn execute(
        &self,
        start_paths: &[PathBuf],
        options: LintOptions,
        events: &dyn LintEventSink,
    ) -> HintResult<LintReport> {
        if start_paths.is_empty() {
            return Err(HintError::NoStartPaths);
        }

        let options = options.with_default_dep_paths(self.fs);
        options.validate_start_paths(self.fs, start_paths)?;
        options.validate(self.fs)?;

        info!(
            start_paths = start_paths.len(),
            recursive = options.recursive,
            dep_paths = options.dep_paths.len(),
            "lint started"
        );
        events.on_event(LintEvent::Started {
            start_paths: start_paths.iter().map(|p| options.resolve(p)).collect(),
        });

        let mut engine = LintEngine::new(self.fs, options).with_event_sink(events);
        engine.check_paths(start_paths, false);
        engine.post_checks();

        let summary = engine.summary();
        info!(
            errors = summary.errors,
            warnings = summary.warnings,
            components = summary.components,
            "lint finished"
        );

        Ok(LintReport {
            findings: engine.into_findings(),
            summary,
        })
    }
}
