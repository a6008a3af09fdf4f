//! Scenario tests for component-hint.
//!
//! Scenarios exercise complete lint runs over realistic component trees.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/local_resolution.rs"]
mod local_resolution;

#[path = "scenarios/third_party.rs"]
mod third_party;
