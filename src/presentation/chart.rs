//! Chart shapes.

use super::shape::Geometry;

/// Chart plot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    /// The `chart:class` attribute value.
    pub fn odf_class(&self) -> &'static str {
        match self {
            Self::Bar => "chart:bar",
            Self::Line => "chart:line",
            Self::Pie => "chart:circle",
        }
    }
}

/// A named data series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    /// (category, value) pairs in display order
    pub points: Vec<(String, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    pub fn with_point(mut self, category: impl Into<String>, value: f64) -> Self {
        self.points.push((category.into(), value));
        self
    }
}

/// A chart embedded in a slide.
///
/// Shared as `Arc<Chart>`; each distinct allocation becomes its own chart
/// object inside the package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    pub title: Option<String>,
    pub kind: ChartKind,
    pub series: Vec<Series>,
    pub geometry: Geometry,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Categories of the first series, which label the x axis.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.series
            .first()
            .into_iter()
            .flat_map(|s| s.points.iter().map(|(c, _)| c.as_str()))
    }
}
