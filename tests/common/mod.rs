//! Common test utilities for component-hint integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated component tree plus helpers to run the CLI
//! - Fixtures: Reusable manifest content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
