//! Chart accumulator shared by the part writers of one save.
//!
//! The content writer registers each chart it places on a slide; the chart
//! writer then emits the chart objects and records which parts it wrote; the
//! manifest writer lists them. Entries are only ever added or updated.

use crate::presentation::Chart;
use std::collections::HashMap;
use std::sync::Arc;

/// Rendering metadata for one chart.
#[derive(Debug, Clone)]
pub struct ChartEntry {
    /// The chart itself
    pub chart: Arc<Chart>,
    /// Name of the embedded object directory, e.g. `Object 1`
    pub object_name: String,
    /// Archive entries written for this chart
    pub parts: Vec<String>,
    /// Cell range each series is bound to inside the chart's local table
    pub series_ranges: Vec<String>,
}

impl ChartEntry {
    /// The `xlink:href` used by `draw:object`, e.g. `./Object 1`.
    pub fn href(&self) -> String {
        format!("./{}", self.object_name)
    }

    /// Manifest path of the object directory, e.g. `Object 1/`.
    pub fn object_dir(&self) -> String {
        format!("{}/", self.object_name)
    }
}

/// Chart identity -> metadata, in registration order.
#[derive(Debug, Default)]
pub struct ChartAccumulator {
    entries: Vec<ChartEntry>,
    // keyed by allocation address; entries hold the Arc
    index: HashMap<usize, usize>,
}

fn identity(chart: &Chart) -> usize {
    chart as *const Chart as usize
}

impl ChartAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `chart`, returning its entry.
    ///
    /// Registering the same chart again returns the existing entry.
    pub fn register(&mut self, chart: &Arc<Chart>) -> &mut ChartEntry {
        let key = identity(chart);
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.entries.push(ChartEntry {
                    chart: Arc::clone(chart),
                    object_name: format!("Object {}", position + 1),
                    parts: Vec::new(),
                    series_ranges: Vec::new(),
                });
                self.index.insert(key, position);
                position
            },
        };
        &mut self.entries[position]
    }

    pub fn get(&self, chart: &Chart) -> Option<&ChartEntry> {
        self.index.get(&identity(chart)).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, chart: &Chart) -> Option<&mut ChartEntry> {
        self.index
            .get(&identity(chart))
            .copied()
            .map(move |i| &mut self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ChartEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
