//! Event Sink Implementations
//!
//! Concrete implementations of `LintEventSink` that write machine-readable
//! output. Human-readable reporters live in `presentation`.
//!
//! - JsonEventSink: NDJSON output for CI/automation

mod json;

pub use json::JsonEventSink;
