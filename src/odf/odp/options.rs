//! Writer configuration.

use super::caching::DiskCaching;
use crate::common::Result;
use crate::odf::core::Compression;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Generator string written to `meta.xml` by default.
pub const DEFAULT_GENERATOR: &str = concat!("odp-writer/", env!("CARGO_PKG_VERSION"));

/// Options controlling how a presentation is saved.
///
/// Plain data; every field has a sensible default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Directory for the temporary archive used by stream targets
    pub temp_directory: PathBuf,
    /// Compression for every entry except `mimetype`
    pub compression: Compression,
    /// Value of `meta:generator`
    pub generator: String,
    /// Disk caching for drawing payloads
    pub disk_caching: DiskCaching,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            temp_directory: PathBuf::from("."),
            compression: Compression::Deflated,
            generator: DEFAULT_GENERATOR.to_string(),
            disk_caching: DiskCaching::default(),
        }
    }
}

impl WriterOptions {
    /// Reject configurations whose caching directory does not exist.
    pub fn validate(&self) -> Result<()> {
        self.disk_caching.validate()
    }
}
