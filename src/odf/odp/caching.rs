//! Disk caching configuration for drawing-heavy part writers.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Whether large payloads are staged on disk, and where.
///
/// The directory is validated when it is configured, not when it is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskCaching {
    enabled: bool,
    directory: PathBuf,
}

impl Default for DiskCaching {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: PathBuf::from("."),
        }
    }
}

impl DiskCaching {
    /// Enable or disable caching, optionally moving it to `directory`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryNotFound`] if `directory` is not an existing
    /// directory; the current configuration is left untouched in that case.
    pub fn set(&mut self, enabled: bool, directory: Option<&Path>) -> Result<()> {
        if let Some(dir) = directory {
            if !dir.is_dir() {
                return Err(Error::DirectoryNotFound(dir.to_path_buf()));
            }
            self.directory = dir.to_path_buf();
        }
        self.enabled = enabled;
        Ok(())
    }

    /// Check a configuration that was built without [`DiskCaching::set`],
    /// e.g. deserialized options.
    pub fn validate(&self) -> Result<()> {
        if self.enabled && !self.directory.is_dir() {
            return Err(Error::DirectoryNotFound(self.directory.clone()));
        }
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Spill `reader` into an anonymous file in the caching directory and
    /// rewind it, ready to be streamed into the archive.
    pub fn stage(&self, reader: &mut dyn Read) -> Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("odpcache")
            .tempfile_in(&self.directory)?;
        std::io::copy(reader, &mut file)?;
        file.seek(SeekFrom::Start(0))?;
        Ok(file)
    }
}
