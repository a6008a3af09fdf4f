//! Lint Event Port
//!
//! Provides an observable interface for lint runs.
//! Reporters subscribe here instead of reading engine internals.

use std::path::PathBuf;

use crate::domain::entities::Finding;
use crate::domain::value_objects::Channel;

/// Event emitted while linting
#[derive(Debug, Clone)]
pub enum LintEvent {
    /// Run started
    Started { start_paths: Vec<PathBuf> },

    /// A component was claimed and its manifest loaded
    ComponentVisited { path: PathBuf, channel: Channel },

    /// A finding was recorded
    Finding(Finding),

    /// Traversal of all start paths settled
    TraversalCompleted { components: usize },

    /// Whole-graph checks finished; the run is complete
    PostStageCompleted { errors: usize, warnings: usize },
}

/// Trait for receiving lint events
///
/// Implementations can be:
/// - TextReporter: grouped, human readable summary
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait LintEventSink: Send + Sync {
    /// Handle a lint event
    fn on_event(&self, event: LintEvent);

    /// Check if this sink wants per-component events
    ///
    /// Some sinks only care about findings and the final summary.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LintEventSink for NoopEventSink {
    fn on_event(&self, _event: LintEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
