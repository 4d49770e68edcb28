//! Unified error types for odp-writer.
//!
//! This module provides a single error type covering every stage of the
//! save pipeline, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
