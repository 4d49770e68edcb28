//! The document writer: turns a [`Presentation`] into an `.odp` package.
//!
//! A save runs these stages in order and stops at the first failure:
//!
//! 1. resolve the output target (stream targets get a temporary file, or an
//!    in-memory buffer when none can be created)
//! 2. open the archive
//! 3. collect drawings and build the [`DrawingRegistry`]
//! 4. run every part writer, moving the archive through them
//! 5. close the archive
//! 6. copy a substituted archive to the stream and delete any temporary file
//!
//! Nothing is rolled back: a failed save may leave a partial file behind.

use super::caching::DiskCaching;
use super::charts::ChartAccumulator;
use super::collector::collect_drawings;
use super::discovery::{PartWriterSet, discover};
use super::options::WriterOptions;
use super::part::PartContext;
use super::registry::DrawingRegistry;
use super::target::{OutputTarget, ResolvedTarget, StreamTarget};
use crate::common::Result;
use crate::odf::core::Archive;
use crate::presentation::Presentation;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Writes a presentation as an OpenDocument Presentation package.
///
/// # Examples
///
/// ```no_run
/// use odp_writer::DocumentWriter;
/// use odp_writer::presentation::{Presentation, RichText};
///
/// # fn main() -> odp_writer::Result<()> {
/// let mut pres = Presentation::new();
/// pres.add_slide().add_shape(RichText::new("Quarterly results"));
///
/// let writer = DocumentWriter::new(&pres);
/// writer.save("results.odp")?;
/// # Ok(())
/// # }
/// ```
pub struct DocumentWriter<'p> {
    presentation: &'p Presentation,
    options: WriterOptions,
    part_writers: PartWriterSet,
}

impl<'p> DocumentWriter<'p> {
    /// Create a writer with default options and the built-in part writers.
    pub fn new(presentation: &'p Presentation) -> Self {
        Self {
            presentation,
            options: WriterOptions::default(),
            part_writers: discover(),
        }
    }

    /// Create a writer with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryNotFound`](crate::Error::DirectoryNotFound)
    /// if disk caching is enabled with a missing directory.
    pub fn with_options(presentation: &'p Presentation, options: WriterOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            presentation,
            options,
            part_writers: discover(),
        })
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn part_writers(&self) -> &PartWriterSet {
        &self.part_writers
    }

    pub fn part_writers_mut(&mut self) -> &mut PartWriterSet {
        &mut self.part_writers
    }

    /// Replace the part writers run by [`save`](Self::save).
    pub fn set_part_writers(&mut self, part_writers: PartWriterSet) -> &mut Self {
        self.part_writers = part_writers;
        self
    }

    /// Turn disk caching on or off, optionally changing its directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryNotFound`](crate::Error::DirectoryNotFound)
    /// if `directory` does not exist. The previous configuration is kept.
    pub fn set_use_disk_caching(
        &mut self,
        enabled: bool,
        directory: Option<&Path>,
    ) -> Result<&mut Self> {
        self.options.disk_caching.set(enabled, directory)?;
        Ok(self)
    }

    pub fn has_disk_caching(&self) -> bool {
        self.options.disk_caching.is_enabled()
    }

    pub fn disk_caching_directory(&self) -> &Path {
        self.options.disk_caching.directory()
    }

    pub fn disk_caching(&self) -> &DiskCaching {
        &self.options.disk_caching
    }

    /// Save to `target`, a file path or a stream marker such as
    /// `stream://output`. Stream targets are written to stdout.
    pub fn save(&self, target: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut stream = stdout.lock();
        self.save_with_stream(target, &mut stream)
    }

    /// Save to `target`, sending stream targets to `stream`.
    pub fn save_with_stream(&self, target: &str, stream: &mut dyn Write) -> Result<()> {
        let target = OutputTarget::parse(target)?;
        self.save_to(&target, stream)
    }

    /// Save to an already parsed target.
    ///
    /// `stream` is only written to for [`OutputTarget::Stream`] targets.
    pub fn save_to(&self, target: &OutputTarget, stream: &mut dyn Write) -> Result<()> {
        let resolved = ResolvedTarget::resolve(target, &self.options.temp_directory)?;
        debug!(
            target = %target,
            path = ?resolved.path(),
            substituted = resolved.is_substituted(),
            "output target resolved"
        );

        let archive = resolved.open_archive(self.options.compression)?;
        let archive = self.apply_parts(archive)?;
        let entries = archive.len();
        let staged = archive.close()?;
        debug!(entries, in_memory = staged.is_some(), "archive closed");

        resolved.finalize(staged, stream)?;
        info!(target = %target, entries, "presentation saved");
        Ok(())
    }

    /// Save into memory.
    ///
    /// The archive is staged in a temporary file in the temp directory, or
    /// in memory if no temporary file can be created there.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.save_to(&OutputTarget::Stream(StreamTarget::Output), &mut bytes)?;
        Ok(bytes)
    }

    fn apply_parts(&self, archive: Archive) -> Result<Archive> {
        let drawings = DrawingRegistry::build(collect_drawings(self.presentation));
        debug!(drawings = drawings.len(), "drawing registry built");

        if self.part_writers.is_empty() {
            warn!("no part writers configured, the archive will have no entries");
        }

        let ctx = PartContext {
            presentation: self.presentation,
            drawings: &drawings,
            options: &self.options,
        };
        let mut charts = ChartAccumulator::new();

        self.part_writers.iter().try_fold(archive, |archive, writer| {
            debug!(writer = writer.name(), "running part writer");
            writer
                .render(archive, &ctx, &mut charts)
                .map_err(|e| e.in_part_writer(writer.name()))
        })
    }
}

impl std::fmt::Debug for DocumentWriter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentWriter")
            .field("slides", &self.presentation.slide_count())
            .field("options", &self.options)
            .field("part_writers", &self.part_writers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn test_empty_target_creates_nothing() {
        let pres = Presentation::new();
        let writer = DocumentWriter::new(&pres);
        let mut sink = Vec::new();
        assert!(matches!(
            writer.save_with_stream("", &mut sink),
            Err(Error::EmptyTarget)
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_disk_caching_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let pres = Presentation::new();
        let mut writer = DocumentWriter::new(&pres);
        assert!(!writer.has_disk_caching());

        writer.set_use_disk_caching(true, Some(dir.path())).unwrap();
        assert!(writer.has_disk_caching());
        assert_eq!(writer.disk_caching_directory(), dir.path());

        let missing = dir.path().join("missing");
        assert!(matches!(
            writer.set_use_disk_caching(false, Some(&missing)),
            Err(Error::DirectoryNotFound(_))
        ));
        assert!(writer.has_disk_caching());
        assert_eq!(writer.disk_caching_directory(), dir.path());
    }

    #[test]
    fn test_with_options_validates() {
        let pres = Presentation::new();
        let dir = tempfile::tempdir().unwrap();
        let mut options = WriterOptions::default();
        options.disk_caching.set(true, Some(dir.path())).unwrap();
        assert!(DocumentWriter::with_options(&pres, options.clone()).is_ok());

        drop(dir);
        assert!(matches!(
            DocumentWriter::with_options(&pres, options),
            Err(Error::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_open_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let pres = Presentation::new();
        let writer = DocumentWriter::new(&pres);
        let target = dir.path().join("missing").join("deck.odp");

        let err = writer
            .save_to(&OutputTarget::File(target.clone()), &mut std::io::sink())
            .unwrap_err();
        assert!(matches!(err, Error::ArchiveOpenFailed { path, .. } if path == target));
    }
}
