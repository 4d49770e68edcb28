//! Shapes placed on slides.

use super::chart::Chart;
use super::drawing::Drawing;
use crate::common::unit::px_to_emu_96;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Position and size of a shape, in EMUs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Geometry {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a geometry from pixel values at 96 DPI.
    pub fn from_px(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::new(
            px_to_emu_96(x),
            px_to_emu_96(y),
            px_to_emu_96(width),
            px_to_emu_96(height),
        )
    }
}

/// A text frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichText {
    pub name: Option<String>,
    pub paragraphs: Vec<String>,
    pub geometry: Geometry,
}

impl RichText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![text.into()],
            ..Default::default()
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }
}

/// A table of plain-text cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub name: Option<String>,
    pub rows: Vec<Vec<String>>,
    pub geometry: Geometry,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Number of columns of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// A group of shapes.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: Option<String>,
    pub shapes: Vec<Shape>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Picture or media clip
    Drawing(Arc<Drawing>),
    /// Chart object
    Chart(Arc<Chart>),
    /// Table
    Table(Table),
    /// Text frame
    RichText(RichText),
    /// Group of shapes
    Group(Group),
}

impl Shape {
    /// The embedded drawing, if this shape can carry binary media.
    pub fn as_drawing(&self) -> Option<&Arc<Drawing>> {
        match self {
            Shape::Drawing(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_chart(&self) -> Option<&Arc<Chart>> {
        match self {
            Shape::Chart(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Shape::Table(_))
    }
}

impl From<Arc<Drawing>> for Shape {
    fn from(drawing: Arc<Drawing>) -> Self {
        Shape::Drawing(drawing)
    }
}

impl From<Drawing> for Shape {
    fn from(drawing: Drawing) -> Self {
        Shape::Drawing(Arc::new(drawing))
    }
}

impl From<Arc<Chart>> for Shape {
    fn from(chart: Arc<Chart>) -> Self {
        Shape::Chart(chart)
    }
}

impl From<Chart> for Shape {
    fn from(chart: Chart) -> Self {
        Shape::Chart(Arc::new(chart))
    }
}

impl From<Table> for Shape {
    fn from(table: Table) -> Self {
        Shape::Table(table)
    }
}

impl From<RichText> for Shape {
    fn from(text: RichText) -> Self {
        Shape::RichText(text)
    }
}

impl From<Group> for Shape {
    fn from(group: Group) -> Self {
        Shape::Group(group)
    }
}
