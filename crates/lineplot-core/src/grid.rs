// File: crates/lineplot-core/src/grid.rs
// Summary: Evenly spaced sample generation for plot inputs.

use crate::error::{PlotError, Result};

/// `count` points starting at `min`, spaced `(max - min) / count` apart.
/// `max` itself is never part of the output.
pub fn linspace(min: f64, max: f64, count: usize) -> Result<Vec<f64>> {
    check_bounds(min, max)?;
    let step = (max - min) / count as f64;
    Ok((0..count).map(|i| min + step * i as f64).collect())
}

/// `count` points from `min` to `max`, both ends included.
/// A single point collapses to `[min]`.
pub fn linspace_inclusive(min: f64, max: f64, count: usize) -> Result<Vec<f64>> {
    check_bounds(min, max)?;
    match count {
        0 => Ok(Vec::new()),
        1 => Ok(vec![min]),
        _ => {
            let step = (max - min) / (count as f64 - 1.0);
            let mut points: Vec<f64> = (0..count).map(|i| min + step * i as f64).collect();
            // last sample is exactly `max`
            if let Some(last) = points.last_mut() {
                *last = max;
            }
            Ok(points)
        }
    }
}

/// Dispatches to [`linspace`] or [`linspace_inclusive`].
pub fn generate(min: f64, max: f64, count: usize, inclusive_upper_bound: bool) -> Result<Vec<f64>> {
    if inclusive_upper_bound {
        linspace_inclusive(min, max, count)
    } else {
        linspace(min, max, count)
    }
}

fn check_bounds(min: f64, max: f64) -> Result<()> {
    if max < min {
        return Err(PlotError::InvalidBounds { min, max });
    }
    Ok(())
}
