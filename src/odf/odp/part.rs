//! The part writer capability.
//!
//! A part writer contributes one logical section of the package (content,
//! styles, pictures, ...). Writers run one after another; each receives the
//! archive by value and hands it back when done, so exactly one writer holds
//! it at a time.

use super::caching::DiskCaching;
use super::charts::ChartAccumulator;
use super::options::WriterOptions;
use super::registry::DrawingRegistry;
use crate::common::Result;
use crate::odf::core::Archive;
use crate::presentation::Presentation;

/// Read-only state shared by every part writer of one save.
#[derive(Debug, Clone, Copy)]
pub struct PartContext<'a> {
    pub presentation: &'a Presentation,
    pub drawings: &'a DrawingRegistry,
    pub options: &'a WriterOptions,
}

impl PartContext<'_> {
    pub fn disk_caching(&self) -> &DiskCaching {
        &self.options.disk_caching
    }
}

/// Trait for writers of one document part.
///
/// Implementations are called exactly once per save, in the order fixed by
/// [`PartWriterSet`](super::PartWriterSet). They may rely on entries written
/// by writers earlier in that order, read the drawing registry, and add or
/// update chart entries. They cannot close the archive.
///
/// # Example
///
/// ```
/// use odp_writer::odf::core::Archive;
/// use odp_writer::odf::odp::{ChartAccumulator, PartContext, PartWriter};
///
/// struct Readme;
///
/// impl PartWriter for Readme {
///     fn name(&self) -> &'static str {
///         "readme"
///     }
///
///     fn render(
///         &self,
///         mut archive: Archive,
///         _ctx: &PartContext<'_>,
///         _charts: &mut ChartAccumulator,
///     ) -> odp_writer::Result<Archive> {
///         archive.write_entry("README.txt", b"generated")?;
///         Ok(archive)
///     }
/// }
/// ```
pub trait PartWriter {
    /// Short name used in diagnostics and errors.
    fn name(&self) -> &'static str;

    /// Write this part's entries and return the archive.
    fn render(
        &self,
        archive: Archive,
        ctx: &PartContext<'_>,
        charts: &mut ChartAccumulator,
    ) -> Result<Archive>;
}
