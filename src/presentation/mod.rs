//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case and reporters with infrastructure dependencies
//! - Human-readable output (grouped text, GitHub annotations)
//!
//! ## Structure
//!
//! - `cli` - Command line definition and flag layering
//! - `factory` - Dependency injection for the binary
//! - `text` - Default grouped reporter
//! - `github` - GitHub Actions workflow commands
//! - `terminal` - Colour and unicode detection
//!
//! ## Usage
//!
//! ```ignore
//! use component_hint::presentation::factory;
//!
//! let reporter = factory::create_reporter(&reporter_options);
//! let report = factory::create_lint_use_case().execute(&paths, options, reporter.as_ref())?;
//! ```

pub mod cli;
pub mod factory;
pub mod github;
pub mod terminal;
pub mod text;
mod theme;

pub use cli::Cli;
pub use factory::{create_lint_use_case, create_reporter, ReporterOptions};
pub use github::{github_actions_annotation, GithubReporter};
pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use text::{render, TextOptions, TextReporter};
