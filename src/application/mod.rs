//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Owns all per-run state (visited set, version registry, findings)
//! - Reaches the filesystem only through the `FileSystem` port
//!
//! ## Use Cases
//!
//! - `LintUseCase` - Pre-flight validation, traversal, post stage
//!
//! ## Services
//!
//! - `LintEngine` - Depth-first traversal driving the checks
//! - `checks` - Per-component and post-stage checks

pub mod checks;
pub mod engine;
pub mod findings;
pub mod lint;
pub mod manifest_loader;
pub mod options;
pub mod versions;

pub use checks::{
    default_checks, default_post_stage_checks, CheckContext, CheckOutcome, ComponentCheck,
    PostStageCheck, PostStageContext,
};
pub use engine::LintEngine;
pub use findings::{ComponentFindings, FindingStore, LintSummary};
pub use lint::{LintReport, LintUseCase};
pub use manifest_loader::{load_manifest, ManifestError};
pub use options::{LintOptions, DEFAULT_DEP_PATH};
pub use versions::{VersionRegistry, VersionRequirement};
