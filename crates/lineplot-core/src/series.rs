// File: crates/lineplot-core/src/series.rs
// Summary: The single X/Y line series a session renders, plus its legend.

use crate::error::{PlotError, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSeries {
    x: Vec<f64>,
    y: Vec<f64>,
    legend: String,
}

impl DataSeries {
    /// Build a series, rejecting inputs whose X and Y lengths differ.
    pub fn new(x: Vec<f64>, y: Vec<f64>, legend: impl Into<String>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PlotError::SizeMismatch { x_len: x.len(), y_len: y.len() });
        }
        Ok(Self { x, y, legend: legend.into() })
    }

    /// Build from `(x, y)` pairs; always length-consistent.
    pub fn from_pairs(pairs: &[(f64, f64)], legend: impl Into<String>) -> Self {
        let (x, y) = pairs.iter().copied().unzip();
        Self { x, y, legend: legend.into() }
    }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn legend(&self) -> &str { &self.legend }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Iterate the samples as `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
