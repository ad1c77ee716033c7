// File: crates/lineplot-core/src/axis.rs
// Summary: Axis identifiers, display ranges and range inference from data.

use std::fmt;

use crate::error::{PlotError, Result};
use crate::number::format_number;

/// Fraction of the data span added on both sides of an inferred range.
pub const RANGE_MARGIN: f64 = 0.03;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => f.write_str("x"),
            AxisKind::Y => f.write_str("y"),
        }
    }
}

/// Closed display interval for one axis.
/// Not validated on construction; [`resolve_range`] enforces `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    /// Data extent widened by [`RANGE_MARGIN`] of its span on each side.
    /// `None` when `data` holds no finite values.
    pub fn padded_extent(data: &[f64]) -> Option<Self> {
        let (lo, hi) = data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if lo > hi {
            return None;
        }
        let margin = (hi - lo) * RANGE_MARGIN;
        Some(Self::new(lo - margin, hi + margin))
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", format_number(self.min), format_number(self.max))
    }
}

/// Pick the range to display on `axis`: the explicit one when set, otherwise
/// the padded data extent. Fails unless the result satisfies `min < max`.
pub fn resolve_range(axis: AxisKind, explicit: Option<AxisRange>, data: &[f64]) -> Result<AxisRange> {
    let range = match explicit {
        Some(r) => r,
        None => AxisRange::padded_extent(data)
            .unwrap_or(AxisRange::new(f64::NAN, f64::NAN)),
    };
    if !range.is_valid() {
        return Err(PlotError::InvalidRange { axis, min: range.min, max: range.max });
    }
    Ok(range)
}
