//! ODF package writing.
//!
//! [`Archive`] owns the ZIP output being produced, either a file or an
//! in-memory buffer. Part writers add entries to it; only the save
//! orchestrator closes it.

use crate::common::{Error, Result};
use crate::odf::constants::{ODF_MIMETYPE, XML_MEDIA_TYPE};
use crate::presentation::ImageFormat;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Compression applied to archive entries other than `mimetype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// No compression
    Stored,
    /// Deflate
    #[default]
    Deflated,
}

impl Compression {
    fn method(self) -> CompressionMethod {
        match self {
            Compression::Stored => CompressionMethod::Stored,
            Compression::Deflated => CompressionMethod::Deflated,
        }
    }
}

/// An entry written to the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path within the ZIP archive
    pub name: String,
    /// Media type recorded in the manifest
    pub media_type: String,
}

/// Backing storage of an archive.
enum Sink {
    File(File),
    Memory(Cursor<Vec<u8>>),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Sink::File(file) => file.write(buf),
            Sink::Memory(buffer) => buffer.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::File(file) => file.flush(),
            Sink::Memory(buffer) => buffer.flush(),
        }
    }
}

impl Seek for Sink {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        match self {
            Sink::File(file) => file.seek(pos),
            Sink::Memory(buffer) => buffer.seek(pos),
        }
    }
}

/// The output package being assembled.
///
/// Entry names are unique: writing a name twice fails with
/// [`Error::DuplicateEntry`]. Every entry carries a fixed timestamp so the
/// same input always yields the same bytes.
pub struct Archive {
    zip_writer: ZipWriter<Sink>,
    path: Option<PathBuf>,
    compression: Compression,
    entries: Vec<ArchiveEntry>,
    names: HashSet<String>,
}

impl Archive {
    /// Create (or truncate) the archive file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveOpenFailed`] if the file cannot be created.
    pub fn open(path: impl AsRef<Path>, compression: Compression) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| Error::ArchiveOpenFailed {
            path: path.clone(),
            source,
        })?;

        Ok(Self::with_sink(Sink::File(file), Some(path), compression))
    }

    /// Create an archive staged in memory.
    ///
    /// [`close`](Self::close) hands back the finished bytes.
    pub fn in_memory(compression: Compression) -> Self {
        Self::with_sink(Sink::Memory(Cursor::new(Vec::new())), None, compression)
    }

    fn with_sink(sink: Sink, path: Option<PathBuf>, compression: Compression) -> Self {
        Self {
            zip_writer: ZipWriter::new(sink),
            path,
            compression,
            entries: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Path of the file being written, `None` for in-memory archives.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Add a file, guessing its manifest media type from the extension.
    pub fn write_entry(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.write_entry_with_media_type(name, content, guess_media_type(name))
    }

    /// Add a file with an explicit manifest media type.
    pub fn write_entry_with_media_type(
        &mut self,
        name: &str,
        content: &[u8],
        media_type: &str,
    ) -> Result<()> {
        self.start_entry(name, media_type, self.compression.method())?;
        self.zip_writer.write_all(content)?;
        Ok(())
    }

    /// Add a file without compression (used for `mimetype`).
    pub fn write_stored(&mut self, name: &str, content: &[u8], media_type: &str) -> Result<()> {
        self.start_entry(name, media_type, CompressionMethod::Stored)?;
        self.zip_writer.write_all(content)?;
        Ok(())
    }

    /// Stream a file into the archive from a reader.
    ///
    /// Returns the number of bytes copied.
    pub fn write_entry_from_reader(
        &mut self,
        name: &str,
        reader: &mut dyn Read,
        media_type: &str,
    ) -> Result<u64> {
        self.start_entry(name, media_type, self.compression.method())?;
        let copied = std::io::copy(reader, &mut self.zip_writer)?;
        Ok(copied)
    }

    /// Check if an entry has already been written.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Entries written so far, in write order.
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn start_entry(
        &mut self,
        name: &str,
        media_type: &str,
        method: CompressionMethod,
    ) -> Result<()> {
        if !self.names.insert(name.to_string()) {
            return Err(Error::DuplicateEntry(name.to_string()));
        }

        let options = SimpleFileOptions::default()
            .compression_method(method)
            .last_modified_time(zip::DateTime::default());
        self.zip_writer.start_file(name, options)?;

        self.entries.push(ArchiveEntry {
            name: name.to_string(),
            media_type: media_type.to_string(),
        });
        Ok(())
    }

    /// Write the central directory and flush the output.
    ///
    /// Returns the package bytes for in-memory archives, `None` for files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveCloseFailed`] if finalization fails.
    pub(crate) fn close(self) -> Result<Option<Vec<u8>>> {
        let sink = self
            .zip_writer
            .finish()
            .map_err(|e| Error::ArchiveCloseFailed(e.to_string()))?;
        match sink {
            Sink::File(mut file) => {
                file.flush()
                    .map_err(|e| Error::ArchiveCloseFailed(e.to_string()))?;
                Ok(None)
            },
            Sink::Memory(buffer) => Ok(Some(buffer.into_inner())),
        }
    }
}

impl std::fmt::Debug for Archive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Archive")
            .field("path", &self.path)
            .field("compression", &self.compression)
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Guess media type from file path.
///
/// Image extensions share the table used for picture entries.
fn guess_media_type(path: &str) -> &'static str {
    if path == ODF_MIMETYPE || path.ends_with('/') {
        return "";
    }
    if path.ends_with(".xml") {
        return XML_MEDIA_TYPE;
    }
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name
        .rsplit_once('.')
        .and_then(|(_, ext)| ImageFormat::from_extension(ext))
        .map_or("application/octet-stream", |format| format.mime_type())
}
