//! OpenDocument Presentation (.odp) writing.
//!
//! [`DocumentWriter`] drives a fixed sequence of [`PartWriter`]s over one
//! [`Archive`](crate::odf::core::Archive). Each writer contributes one part of
//! the package. They share a read-only [`DrawingRegistry`], built before the
//! first writer runs, and a [`ChartAccumulator`] that earlier writers fill in
//! for later ones.
//!
//! # Example
//!
//! ```no_run
//! use odp_writer::odf::odp::DocumentWriter;
//! use odp_writer::presentation::{Drawing, Presentation};
//! use std::sync::Arc;
//!
//! # fn main() -> odp_writer::Result<()> {
//! let logo = Arc::new(Drawing::from_file("logo", "logo.png")?);
//! let mut pres = Presentation::new();
//! pres.add_slide().add_shape(logo.clone());
//! pres.add_slide().add_shape(logo);
//!
//! // the logo is embedded once and referenced from both slides
//! DocumentWriter::new(&pres).save("deck.odp")?;
//! # Ok(())
//! # }
//! ```

mod caching;
mod charts;
mod collector;
mod discovery;
mod options;
mod part;
pub mod parts;
mod registry;
mod target;
mod writer;

pub use caching::DiskCaching;
pub use charts::{ChartAccumulator, ChartEntry};
pub use collector::collect_drawings;
pub use discovery::{PartWriterSet, builtin_part_writer_names, discover};
pub use options::{DEFAULT_GENERATOR, WriterOptions};
pub use part::{PartContext, PartWriter};
pub use registry::DrawingRegistry;
pub use target::{OutputTarget, STREAM_OUTPUT, STREAM_STDOUT, StreamTarget};
pub use writer::DocumentWriter;
