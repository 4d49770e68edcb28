//! Common types and utilities shared by the model and the writer.

// Submodule declarations
pub mod error;
pub mod metadata;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use metadata::Metadata;
