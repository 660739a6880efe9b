//! Common test utilities for complexity-core
//!
//! Shared snippet fixtures and assertions for integration tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use fixtures::*;
