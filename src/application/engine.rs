//! Lint engine
//!
//! Walks the component graph depth-first from the start paths. Every
//! component is claimed at most once per engine, identified by its canonical
//! path; the channel it is first reached under sticks.
//!
//! Findings are recorded in the `FindingStore` and forwarded to the
//! configured `LintEventSink` as they happen.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::application::checks::{
    component_identity, default_checks, default_post_stage_checks, CheckContext, CheckOutcome,
    ComponentCheck, PostStageCheck, PostStageContext,
};
use crate::application::findings::{FindingStore, LintSummary};
use crate::application::manifest_loader::load_manifest;
use crate::application::options::LintOptions;
use crate::application::versions::VersionRegistry;
use crate::domain::entities::{Component, Finding};
use crate::domain::ports::{FileSystem, LintEvent, LintEventSink, NoopEventSink};
use crate::domain::value_objects::Channel;

pub struct LintEngine<'a> {
    fs: &'a dyn FileSystem,
    options: LintOptions,
    checks: Vec<Box<dyn ComponentCheck>>,
    post_stage: Vec<Box<dyn PostStageCheck>>,
    events: &'a dyn LintEventSink,
    visited: HashSet<PathBuf>,
    versions: VersionRegistry,
    findings: FindingStore,
}

impl<'a> LintEngine<'a> {
    pub fn new(fs: &'a dyn FileSystem, options: LintOptions) -> Self {
        Self {
            fs,
            options,
            checks: default_checks(),
            post_stage: default_post_stage_checks(),
            events: &NoopEventSink,
            visited: HashSet::new(),
            versions: VersionRegistry::new(),
            findings: FindingStore::new(),
        }
    }

    pub fn with_event_sink(mut self, events: &'a dyn LintEventSink) -> Self {
        self.events = events;
        self
    }

    /// Replace the per-component checks.
    pub fn with_checks(mut self, checks: Vec<Box<dyn ComponentCheck>>) -> Self {
        self.checks = checks;
        self
    }

    pub fn with_post_stage_checks(mut self, checks: Vec<Box<dyn PostStageCheck>>) -> Self {
        self.post_stage = checks;
        self
    }

    pub fn options(&self) -> &LintOptions {
        &self.options
    }

    /// Visit each start path in order.
    ///
    /// Start paths given as external are checked under the warning channel
    /// when `warn_on_deps` is set.
    pub fn check_paths<P: AsRef<Path>>(&mut self, start_paths: &[P], is_external: bool) {
        let channel = if is_external {
            Channel::for_dependencies(self.options.warn_on_deps)
        } else {
            Channel::Error
        };

        for start in start_paths {
            let start = self.options.resolve(start.as_ref());
            self.visit(&start, channel);
        }

        info!(components = self.visited.len(), "traversal completed");
        self.events.on_event(LintEvent::TraversalCompleted {
            components: self.visited.len(),
        });
    }

    /// Run whole-graph checks over what traversal accumulated.
    pub fn post_checks(&mut self) {
        let ctx = PostStageContext {
            options: &self.options,
            versions: &self.versions,
        };
        let mut produced = Vec::new();
        for check in &self.post_stage {
            debug!(check = check.name(), "running post-stage check");
            produced.extend(check.run(&ctx));
        }

        for finding in produced {
            self.record(finding);
        }

        let summary = self.summary();
        self.events.on_event(LintEvent::PostStageCompleted {
            errors: summary.errors,
            warnings: summary.warnings,
        });
    }

    pub fn findings(&self) -> &FindingStore {
        &self.findings
    }

    pub fn versions(&self) -> &VersionRegistry {
        &self.versions
    }

    /// Whether the component at `path` (canonical) was claimed.
    pub fn is_visited(&self, path: &Path) -> bool {
        self.visited.contains(path)
    }

    pub fn summary(&self) -> LintSummary {
        LintSummary {
            errors: self.findings.count(Channel::Error),
            warnings: self.findings.count(Channel::Warning),
            components: self.visited.len(),
        }
    }

    pub fn into_findings(self) -> FindingStore {
        self.findings
    }

    fn visit(&mut self, dir: &Path, channel: Channel) {
        let path = component_identity(self.fs, dir);

        if self.options.ignore.is_ignored(&path) {
            debug!(component = %path.display(), "ignored");
            return;
        }
        if !self.visited.insert(path.clone()) {
            return;
        }

        let manifest = match load_manifest(self.fs, &path) {
            Ok(manifest) => manifest,
            Err(err) => {
                debug!(component = %path.display(), error = %err, "manifest not loaded");
                self.record(Finding::new(path, channel, err.to_string()));
                return;
            }
        };

        debug!(component = %path.display(), %channel, "visiting component");
        if self.events.wants_detailed_events() {
            self.events.on_event(LintEvent::ComponentVisited {
                path: path.clone(),
                channel,
            });
        }

        let component = Component::new(path, manifest);
        let mut outcome = CheckOutcome::default();
        {
            let mut ctx = CheckContext {
                fs: self.fs,
                options: &self.options,
                versions: &mut self.versions,
            };
            for check in &self.checks {
                outcome.merge(check.run(&component, &mut ctx));
            }
        }

        for message in outcome.findings {
            self.record(Finding::new(component.path(), channel, message));
        }

        if !self.options.recursive {
            return;
        }

        for dep in &outcome.local {
            self.visit(dep, channel);
        }
        let dep_channel = Channel::for_dependencies(self.options.warn_on_deps);
        for dep in &outcome.external {
            self.visit(dep, dep_channel);
        }
    }

    fn record(&mut self, finding: Finding) {
        self.findings
            .record(&finding.component, finding.channel, finding.message.as_str());
        self.events.on_event(LintEvent::Finding(finding));
    }
}
