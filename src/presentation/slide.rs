//! Slides of a presentation.

use super::shape::Shape;

/// A slide: an ordered list of shapes.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    /// Optional slide name (`draw:name`)
    pub name: Option<String>,
    /// Shapes in declaration (z) order
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape and return `self` for chaining.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> &mut Self {
        self.shapes.push(shape.into());
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}
