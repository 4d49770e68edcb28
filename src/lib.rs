//! odp-writer - write OpenDocument Presentation (.odp) files
//!
//! This library turns an in-memory [`Presentation`](presentation::Presentation)
//! into an ODF package: a ZIP archive holding `content.xml`, `styles.xml`,
//! `meta.xml`, `settings.xml`, embedded chart objects, pictures and the
//! package manifest.
//!
//! # Features
//!
//! - **Shared drawings**: a picture placed on several slides is embedded once
//! - **Charts**: bar, line and pie charts as embedded chart objects
//! - **Stream targets**: `stream://output` writes the package to any `Write`
//! - **Disk caching**: base64 payloads are staged on disk instead of in memory
//! - **Deterministic output**: the same presentation always yields the same bytes
//!
//! # Example
//!
//! ```no_run
//! use odp_writer::DocumentWriter;
//! use odp_writer::presentation::{Chart, ChartKind, Presentation, RichText, Series};
//!
//! # fn main() -> odp_writer::Result<()> {
//! let mut pres = Presentation::new();
//! pres.metadata.title = Some("Quarterly review".to_string());
//! pres.add_slide().add_shape(RichText::new("Q3 revenue"));
//! pres.add_slide().add_shape(
//!     Chart::new(ChartKind::Bar)
//!         .with_series(Series::new("2024").with_point("Q3", 42.0)),
//! );
//!
//! DocumentWriter::new(&pres).save("review.odp")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing to a stream
//!
//! ```no_run
//! use odp_writer::DocumentWriter;
//! use odp_writer::presentation::Presentation;
//!
//! # fn main() -> odp_writer::Result<()> {
//! let pres = Presentation::new();
//! let mut body = Vec::new();
//! DocumentWriter::new(&pres).save_with_stream("stream://output", &mut body)?;
//! assert!(body.starts_with(b"PK"));
//! # Ok(())
//! # }
//! ```

/// Common types and utilities
pub mod common;

/// OpenDocument packaging and the presentation writer
pub mod odf;

/// Presentation object model
pub mod presentation;

pub use common::{Error, Metadata, Result};
pub use odf::odp::{DocumentWriter, OutputTarget, PartWriter, WriterOptions};
