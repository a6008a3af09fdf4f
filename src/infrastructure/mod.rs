//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.
//!
//! - `fs` - FileSystem backed by the local disk
//! - `events` - Machine-readable LintEventSink implementations

pub mod events;
pub mod fs;

pub use events::JsonEventSink;
pub use fs::LocalFs;
