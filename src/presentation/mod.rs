//! Presentation object model consumed by the writer.
//!
//! The model is deliberately small: slides hold an ordered list of shapes,
//! groups hold an ordered list of child shapes, and the writer only needs to
//! ask a shape whether it embeds a drawing or is a table.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use odp_writer::presentation::{Drawing, Geometry, Group, Presentation, Table};
//!
//! let logo = Arc::new(
//!     Drawing::from_data_uri("logo", "data:image/png;base64,iVBORw0KGgo=")?
//!         .with_geometry(Geometry::from_px(10, 10, 120, 60)),
//! );
//!
//! let mut pres = Presentation::new();
//! pres.add_slide()
//!     .add_shape(logo.clone())
//!     .add_shape(Table::new(vec![vec!["Q1".into(), "Q2".into()]]));
//! pres.add_slide().add_shape(Group::new().with_shape(logo.into()));
//! # Ok::<(), odp_writer::Error>(())
//! ```

// Submodule declarations
mod chart;
mod drawing;
mod format;
mod prs;
mod shape;
mod slide;

// Re-exports
pub use chart::{Chart, ChartKind, Series};
pub use drawing::{Drawing, DrawingKind, DrawingSource};
pub use format::{ImageFormat, media_type_for_extension};
pub use prs::{Layout, Presentation};
pub use shape::{Geometry, Group, RichText, Shape, Table};
pub use slide::Slide;
