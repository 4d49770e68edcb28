//! Part writer discovery.
//!
//! The built-in writers are listed in a static registration table. The order
//! of that table is the order in which parts are written, so it never depends
//! on anything outside this file.

use super::part::PartWriter;
use super::parts::{
    ChartWriter, ContentWriter, ManifestWriter, MetaWriter, MimetypeWriter, PictureWriter,
    SettingsWriter, StylesWriter, ThumbnailWriter,
};

type Factory = fn() -> Box<dyn PartWriter>;

fn boxed<W: PartWriter + Default + 'static>() -> Box<dyn PartWriter> {
    Box::new(W::default())
}

/// Built-in part writers in execution order.
///
/// `mimetype` must be the first entry of the package. `content` registers
/// charts before `charts` writes them, and `manifest` lists everything written
/// before it, so it comes last.
static BUILTIN_PART_WRITERS: &[(&str, Factory)] = &[
    ("mimetype", boxed::<MimetypeWriter>),
    ("content", boxed::<ContentWriter>),
    ("styles", boxed::<StylesWriter>),
    ("meta", boxed::<MetaWriter>),
    ("settings", boxed::<SettingsWriter>),
    ("charts", boxed::<ChartWriter>),
    ("pictures", boxed::<PictureWriter>),
    ("thumbnail", boxed::<ThumbnailWriter>),
    ("manifest", boxed::<ManifestWriter>),
];

/// Names of the built-in part writers, in execution order.
pub fn builtin_part_writer_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_PART_WRITERS.iter().map(|(name, _)| *name)
}

/// Instantiate the built-in part writers.
pub fn discover() -> PartWriterSet {
    PartWriterSet {
        writers: BUILTIN_PART_WRITERS
            .iter()
            .map(|(_, factory)| factory())
            .collect(),
    }
}

/// An ordered collection of part writers.
///
/// Writers run in insertion order.
#[derive(Default)]
pub struct PartWriterSet {
    writers: Vec<Box<dyn PartWriter>>,
}

impl PartWriterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in writers, equivalent to [`discover`].
    pub fn builtin() -> Self {
        discover()
    }

    /// Append a writer; it runs after every writer already in the set.
    pub fn push(&mut self, writer: Box<dyn PartWriter>) -> &mut Self {
        self.writers.push(writer);
        self
    }

    /// Insert a writer right before the writer named `before`, or at the end
    /// if no writer has that name.
    pub fn insert_before(&mut self, before: &str, writer: Box<dyn PartWriter>) -> &mut Self {
        let position = self
            .writers
            .iter()
            .position(|w| w.name() == before)
            .unwrap_or(self.writers.len());
        self.writers.insert(position, writer);
        self
    }

    /// Remove the writer named `name`, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn PartWriter>> {
        let position = self.writers.iter().position(|w| w.name() == name)?;
        Some(self.writers.remove(position))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.writers.iter().map(|w| w.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PartWriter> {
        self.writers.iter().map(|w| w.as_ref())
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl std::fmt::Debug for PartWriterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
