//! Output target resolution.
//!
//! A save either goes straight to a file or to the logical output stream. The
//! stream case is served by a temporary archive file that is copied to the
//! stream and removed once the archive has been closed successfully. When no
//! temporary file can be created the archive is staged in memory instead.

use crate::common::{Error, Result};
use crate::odf::core::{Archive, Compression};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::TempPath;
use tracing::{debug, warn};

/// Marker for the logical output stream.
pub const STREAM_OUTPUT: &str = "stream://output";
/// Marker for the process standard output.
pub const STREAM_STDOUT: &str = "stream://stdout";

const TEMP_PREFIX: &str = "odptmp";

/// Which logical stream a save is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamTarget {
    Output,
    Stdout,
}

impl StreamTarget {
    /// The textual marker naming this stream.
    pub fn marker(&self) -> &'static str {
        match self {
            StreamTarget::Output => STREAM_OUTPUT,
            StreamTarget::Stdout => STREAM_STDOUT,
        }
    }
}

/// Where a saved presentation goes.
///
/// # Examples
///
/// ```
/// use odp_writer::odf::odp::{OutputTarget, StreamTarget};
///
/// let target: OutputTarget = "Stream://STDOUT".parse()?;
/// assert_eq!(target, OutputTarget::Stream(StreamTarget::Stdout));
///
/// let target: OutputTarget = "deck.odp".parse()?;
/// assert_eq!(target, OutputTarget::File("deck.odp".into()));
/// # Ok::<(), odp_writer::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A path on disk
    File(PathBuf),
    /// A logical stream
    Stream(StreamTarget),
}

impl OutputTarget {
    /// Classify a target string. Stream markers are matched ASCII
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTarget`] for an empty string.
    pub fn parse(target: &str) -> Result<Self> {
        if target.is_empty() {
            return Err(Error::EmptyTarget);
        }

        if target.eq_ignore_ascii_case(STREAM_OUTPUT) {
            Ok(OutputTarget::Stream(StreamTarget::Output))
        } else if target.eq_ignore_ascii_case(STREAM_STDOUT) {
            Ok(OutputTarget::Stream(StreamTarget::Stdout))
        } else {
            Ok(OutputTarget::File(PathBuf::from(target)))
        }
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, OutputTarget::Stream(_))
    }
}

impl FromStr for OutputTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<PathBuf> for OutputTarget {
    fn from(path: PathBuf) -> Self {
        OutputTarget::File(path)
    }
}

impl From<&Path> for OutputTarget {
    fn from(path: &Path) -> Self {
        OutputTarget::File(path.to_path_buf())
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stream(stream) => f.write_str(stream.marker()),
        }
    }
}

/// Where the archive is actually written.
enum Destination {
    File(PathBuf),
    Temp(TempPath),
    Memory(StreamTarget),
}

/// The resolved write destination of a save.
pub(crate) struct ResolvedTarget {
    destination: Destination,
}

impl ResolvedTarget {
    /// Pick the real write destination for `target`.
    ///
    /// Stream targets get a temporary file in `temp_dir`. If that cannot be
    /// created the archive is buffered in memory.
    pub(crate) fn resolve(target: &OutputTarget, temp_dir: &Path) -> Result<Self> {
        let destination = match target {
            OutputTarget::File(path) if path.as_os_str().is_empty() => {
                return Err(Error::EmptyTarget);
            },
            OutputTarget::File(path) => Destination::File(path.clone()),
            OutputTarget::Stream(stream) => {
                match tempfile::Builder::new()
                    .prefix(TEMP_PREFIX)
                    .tempfile_in(temp_dir)
                {
                    Ok(file) => {
                        let temp = file.into_temp_path();
                        debug!(path = ?temp, "substituting temporary file for output stream");
                        Destination::Temp(temp)
                    },
                    Err(e) => {
                        warn!(
                            dir = ?temp_dir,
                            error = %e,
                            "could not allocate temporary file, staging archive in memory"
                        );
                        Destination::Memory(*stream)
                    },
                }
            },
        };
        Ok(Self { destination })
    }

    /// File backing the archive, `None` when staged in memory.
    pub(crate) fn path(&self) -> Option<&Path> {
        match &self.destination {
            Destination::File(path) => Some(path.as_path()),
            Destination::Temp(temp) => Some(&**temp),
            Destination::Memory(_) => None,
        }
    }

    /// True unless the archive is written straight to the requested file.
    pub(crate) fn is_substituted(&self) -> bool {
        !matches!(self.destination, Destination::File(_))
    }

    pub(crate) fn open_archive(&self, compression: Compression) -> Result<Archive> {
        match &self.destination {
            Destination::File(path) => Archive::open(path, compression),
            Destination::Temp(temp) => Archive::open(temp, compression),
            Destination::Memory(_) => Ok(Archive::in_memory(compression)),
        }
    }

    /// Deliver the closed archive to `stream` and remove any temporary file.
    ///
    /// `staged` holds the bytes of an in-memory archive.
    ///
    /// # Errors
    ///
    /// [`Error::CopyFailed`] if the copy fails (output missing), then
    /// [`Error::CleanupFailed`] if only the removal fails (output delivered).
    pub(crate) fn finalize(self, staged: Option<Vec<u8>>, stream: &mut dyn Write) -> Result<()> {
        match self.destination {
            Destination::File(_) => Ok(()),
            Destination::Memory(target) => {
                let bytes = staged.unwrap_or_default();
                let copy_failed = |source| Error::CopyFailed {
                    from: PathBuf::from(target.marker()),
                    source,
                };
                stream.write_all(&bytes).map_err(copy_failed)?;
                stream.flush().map_err(copy_failed)?;
                debug!(bytes = bytes.len(), "copied in-memory archive to output stream");
                Ok(())
            },
            Destination::Temp(temp) => {
                let path = temp.to_path_buf();
                let copy_failed = |source| Error::CopyFailed {
                    from: path.clone(),
                    source,
                };
                let mut file = File::open(&temp).map_err(copy_failed)?;
                let copied = std::io::copy(&mut file, stream).map_err(copy_failed)?;
                stream.flush().map_err(copy_failed)?;
                drop(file);
                debug!(bytes = copied, "copied temporary archive to output stream");

                temp.close()
                    .map_err(|source| Error::CleanupFailed { path, source })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_targets() {
        assert!(matches!(OutputTarget::parse(""), Err(Error::EmptyTarget)));
        assert_eq!(
            OutputTarget::parse("STREAM://output").unwrap(),
            OutputTarget::Stream(StreamTarget::Output)
        );
        assert_eq!(
            OutputTarget::parse("stream://stdout").unwrap(),
            OutputTarget::Stream(StreamTarget::Stdout)
        );
        assert_eq!(
            OutputTarget::parse("stream://stderr").unwrap(),
            OutputTarget::File(PathBuf::from("stream://stderr"))
        );
        assert_eq!(OutputTarget::Stream(StreamTarget::Output).to_string(), STREAM_OUTPUT);
    }

    #[test]
    fn test_resolve_file_target() {
        let resolved =
            ResolvedTarget::resolve(&OutputTarget::File("a.odp".into()), Path::new(".")).unwrap();
        assert_eq!(resolved.path(), Some(Path::new("a.odp")));
        assert!(!resolved.is_substituted());

        let empty = ResolvedTarget::resolve(&OutputTarget::File(PathBuf::new()), Path::new("."));
        assert!(matches!(empty, Err(Error::EmptyTarget)));
    }

    #[test]
    fn test_resolve_stream_uses_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = ResolvedTarget::resolve(
            &OutputTarget::Stream(StreamTarget::Output),
            dir.path(),
        )
        .unwrap();
        assert!(resolved.is_substituted());
        let temp_path = resolved.path().unwrap().to_path_buf();
        assert!(temp_path.starts_with(dir.path()));
        std::fs::write(&temp_path, b"archive bytes").unwrap();

        let mut sink = Vec::new();
        resolved.finalize(None, &mut sink).unwrap();
        assert_eq!(sink, b"archive bytes");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_resolve_stream_stages_in_memory_without_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let resolved =
            ResolvedTarget::resolve(&OutputTarget::Stream(StreamTarget::Stdout), &missing)
                .unwrap();
        assert!(resolved.is_substituted());
        assert_eq!(resolved.path(), None);
        assert!(!Path::new(STREAM_STDOUT).exists());

        let mut archive = resolved.open_archive(Compression::Deflated).unwrap();
        archive.write_entry("content.xml", b"<a/>").unwrap();
        let staged = archive.close().unwrap();
        let expected = staged.clone().unwrap();

        let mut sink = Vec::new();
        resolved.finalize(staged, &mut sink).unwrap();
        assert_eq!(sink, expected);
        let zip = zip::ZipArchive::new(std::io::Cursor::new(sink)).unwrap();
        assert_eq!(zip.len(), 1);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = ResolvedTarget::resolve(
            &OutputTarget::Stream(StreamTarget::Output),
            dir.path(),
        )
        .unwrap();
        let temp_path = resolved.path().unwrap().to_path_buf();
        std::fs::write(&temp_path, b"data").unwrap();

        let err = resolved.finalize(None, &mut BrokenPipe).unwrap_err();
        assert!(matches!(err, Error::CopyFailed { .. }));
        assert!(!err.is_output_usable());
        // dropped TempPath removes the file
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_memory_copy_failure_names_marker() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = ResolvedTarget::resolve(
            &OutputTarget::Stream(StreamTarget::Output),
            &dir.path().join("missing"),
        )
        .unwrap();

        let err = resolved
            .finalize(Some(b"data".to_vec()), &mut BrokenPipe)
            .unwrap_err();
        assert!(matches!(&err, Error::CopyFailed { from, .. } if from == Path::new(STREAM_OUTPUT)));
        assert!(!err.is_output_usable());
    }

    /// Removes the temporary file out from under the writer once flushed.
    struct RemovingSink {
        temp_path: PathBuf,
        received: Vec<u8>,
    }

    impl Write for RemovingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.received.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            std::fs::remove_file(&self.temp_path)
        }
    }

    #[test]
    fn test_cleanup_failure_keeps_output() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = ResolvedTarget::resolve(
            &OutputTarget::Stream(StreamTarget::Output),
            dir.path(),
        )
        .unwrap();
        let temp_path = resolved.path().unwrap().to_path_buf();
        std::fs::write(&temp_path, b"complete archive").unwrap();

        let mut sink = RemovingSink {
            temp_path: temp_path.clone(),
            received: Vec::new(),
        };
        let err = resolved.finalize(None, &mut sink).unwrap_err();
        assert!(matches!(&err, Error::CleanupFailed { path, .. } if *path == temp_path));
        assert!(err.is_output_usable());
        assert_eq!(sink.received, b"complete archive");
    }
}
