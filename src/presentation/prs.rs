//! The in-memory presentation handed to the writer.

use super::slide::Slide;
use crate::common::Metadata;
use crate::common::unit::{EMUS_PER_CM, cm_to_emu};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Slide size, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub width: i64,
    pub height: i64,
}

impl Layout {
    /// 4:3 screen show (25.4cm x 19.05cm).
    pub const SCREEN_4X3: Layout = Layout {
        width: 9_144_000,
        height: 6_858_000,
    };

    /// 16:9 widescreen (28cm x 15.75cm).
    pub fn widescreen() -> Self {
        Self {
            width: 28 * EMUS_PER_CM,
            height: cm_to_emu(15.75),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::SCREEN_4X3
    }
}

/// A presentation: metadata, slide size, slides and an optional thumbnail.
///
/// # Examples
///
/// ```
/// use odp_writer::presentation::{Presentation, RichText};
///
/// let mut pres = Presentation::new();
/// pres.add_slide().add_shape(RichText::new("Hello"));
/// assert_eq!(pres.slide_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    pub metadata: Metadata,
    pub layout: Layout,
    slides: Vec<Slide>,
    thumbnail: Option<Bytes>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty slide and return it for editing.
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::new());
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn push_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// PNG preview stored as `Thumbnails/thumbnail.png`.
    pub fn thumbnail(&self) -> Option<&Bytes> {
        self.thumbnail.as_ref()
    }

    pub fn set_thumbnail(&mut self, png: impl Into<Bytes>) {
        self.thumbnail = Some(png.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::RichText;

    #[test]
    fn test_add_slides() {
        let mut pres = Presentation::new();
        pres.add_slide().add_shape(RichText::new("one"));
        pres.add_slide();
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slide(0).map(|s| s.shapes().len()), Some(1));
        assert!(pres.slide(2).is_none());
    }

    #[test]
    fn test_layouts() {
        assert_eq!(Layout::default(), Layout::SCREEN_4X3);
        assert_eq!(Layout::widescreen().width, 10_080_000);
        assert_eq!(Layout::widescreen().height, 5_670_000);
    }
}
