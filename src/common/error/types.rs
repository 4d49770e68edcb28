//! Unified error type for the ODP writer.
//!
//! Every failure of a save operation is terminal for that call. The variants
//! identify the pipeline stage that failed and carry the underlying cause.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for odp-writer operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested output filename was empty
    #[error("Filename is empty")]
    EmptyTarget,

    /// The disk caching directory does not exist
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The output archive could not be created
    #[error("Could not open archive {}: {source}", path.display())]
    ArchiveOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry with the same name was already written to the archive
    #[error("Duplicate archive entry: {0}")]
    DuplicateEntry(String),

    /// A part writer failed while contributing its entries
    #[error("Part writer '{writer}' failed: {source}")]
    PartWriterFailed {
        writer: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// The archive could not be finalized
    #[error("Could not close archive: {0}")]
    ArchiveCloseFailed(String),

    /// The temporary archive could not be copied to the logical stream
    #[error("Could not copy temporary zip file {} to output stream: {source}", from.display())]
    CopyFailed {
        from: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output was delivered but the temporary file could not be removed
    #[error("The file {} could not be removed: {source}", path.display())]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lookup of an unregistered object
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Invalid input data
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the output is complete despite this error.
    ///
    /// Only a failed temporary-file cleanup leaves a usable document behind;
    /// every other failure means the output is missing or corrupt.
    pub fn is_output_usable(&self) -> bool {
        matches!(self, Error::CleanupFailed { .. })
    }

    /// Wrap a part writer failure, keeping duplicate entries visible as such.
    pub(crate) fn in_part_writer(self, writer: &'static str) -> Self {
        match self {
            err @ (Error::DuplicateEntry(_) | Error::PartWriterFailed { .. }) => err,
            other => Error::PartWriterFailed {
                writer,
                source: Box::new(other),
            },
        }
    }
}

/// Result type for odp-writer operations.
pub type Result<T> = std::result::Result<T, Error>;
