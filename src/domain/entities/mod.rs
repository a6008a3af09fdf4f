//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Component` - A directory described by a manifest
//! - `Manifest` - The parsed `component.json`
//! - `Finding` - One reported defect

mod component;
mod finding;
mod manifest;

pub use component::Component;
pub use finding::Finding;
pub use manifest::{AssetCategory, Dependencies, DependencySpec, Manifest, MANIFEST_FILE};
