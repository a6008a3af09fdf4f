//! Binary-side command handlers.

pub mod lint;
