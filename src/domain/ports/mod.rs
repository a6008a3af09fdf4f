//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and presentation layers provide concrete implementations.

pub mod file_system;
pub mod lint_events;

pub use file_system::{EntryKind, FileSystem, FsError, FsResult};
pub use lint_events::{LintEvent, LintEventSink, NoopEventSink};
