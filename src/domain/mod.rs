//! Domain Layer
//!
//! The vocabulary of component-hint, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Component, Manifest, Finding
//! - `value_objects/` - Channel, ignore patterns, path arithmetic
//! - `services/` - Resolution tie-break
//! - `ports/` - FileSystem and LintEventSink interfaces
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All probes go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
