//! component-hint - lint a graph of component.json components
//!
//! Starting from one or more component directories, component-hint checks
//! that every declared file exists, resolves local and external
//! dependencies, flags unused or ambiguous dependency paths, and reports
//! dependencies required at more than one version.
//!
//! ## Layers
//!
//! - `domain` - Components, manifests, findings and the I/O ports
//! - `application` - The traversal engine, checks and the lint use case
//! - `infrastructure` - Local disk and NDJSON event output
//! - `presentation` - CLI definition and human-readable reporters
//! - `config` - TOML configuration with environment overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{LintEngine, LintOptions, LintReport, LintSummary, LintUseCase};
pub use config::Config;
pub use domain::entities::{Component, Finding, Manifest};
pub use domain::value_objects::Channel;
pub use error::{HintError, HintResult};
pub use infrastructure::LocalFs;
