//! Use Case Factory
//!
//! Creates the lint use case and reporters with infrastructure dependencies
//! wired up. This is the dependency injection point for the binary.

use std::path::PathBuf;

use crate::application::LintUseCase;
use crate::config::ReporterKind;
use crate::domain::ports::{LintEventSink, NoopEventSink};
use crate::infrastructure::{JsonEventSink, LocalFs};

use super::github::GithubReporter;
use super::text::{TextOptions, TextReporter};

static LOCAL_FS: LocalFs = LocalFs;

/// How the selected reporter should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterOptions {
    pub kind: ReporterKind,
    pub quiet: bool,
    pub color: bool,
    pub unicode: bool,
    /// Annotations are written relative to this directory
    pub base_dir: PathBuf,
}

/// Create a lint use case reading the local disk.
pub fn create_lint_use_case() -> LintUseCase<'static> {
    LintUseCase::new(&LOCAL_FS)
}

/// Create the reporter for a run, writing to stdout.
pub fn create_reporter(options: &ReporterOptions) -> Box<dyn LintEventSink> {
    match options.kind {
        ReporterKind::Default => Box::new(TextReporter::stdout(TextOptions {
            color: options.color,
            unicode: options.unicode,
            quiet: options.quiet,
        })),
        ReporterKind::Json => Box::new(JsonEventSink::stdout()),
        ReporterKind::Github => Box::new(GithubReporter::stdout(&options.base_dir, options.quiet)),
        ReporterKind::Null => Box::new(NoopEventSink),
    }
}
