//! Core ODF package functionality.
//!
//! This module owns the ZIP container side of the writer: creating the
//! archive, adding uniquely named entries with their manifest media types,
//! and finalizing the central directory.

/// ODF package writing
mod archive;

pub use archive::{Archive, ArchiveEntry, Compression};
