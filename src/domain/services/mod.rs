//! Domain Services
//!
//! Stateless domain logic shared by the check modules.

pub mod resolution;

pub use resolution::{resolve_in, Resolution};
