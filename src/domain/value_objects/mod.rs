//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod channel;
mod component_name;
mod config_warning;
mod ignore_patterns;
pub mod path;

pub use channel::Channel;
pub use component_name::normalize_component_name;
pub use config_warning::ConfigWarning;
pub use ignore_patterns::IgnorePatterns;
