//! OpenDocument Format packaging.
//!
//! - [`constants`]: media types, part paths and XML namespaces
//! - [`core`]: the ZIP archive every part is written into
//! - [`odp`]: the presentation writer and its part writers

pub mod constants;
pub mod core;
pub mod odp;
