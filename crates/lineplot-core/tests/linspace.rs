// File: crates/lineplot-core/tests/linspace.rs
// Purpose: Evenly spaced generators: counts, endpoints, spacing, bad bounds.

use approx::assert_relative_eq;
use lineplot_core::{generate, linspace, linspace_inclusive, PlotError};

#[test]
fn exclusive_excludes_upper_bound() {
    for &(min, max, count) in &[(0.0, 1.0, 10usize), (-3.0, 7.5, 4), (2.0, 2.5, 1), (0.0, std::f64::consts::TAU, 100)] {
        let pts = linspace(min, max, count).expect("valid bounds");
        assert_eq!(pts.len(), count);
        assert_eq!(pts[0], min);
        let step = (max - min) / count as f64;
        for w in pts.windows(2) {
            assert!(w[1] > w[0], "strictly increasing");
            assert_relative_eq!(w[1] - w[0], step, epsilon = 1e-12);
        }
        assert!(pts.iter().all(|&p| p < max), "max never included");
    }
}

#[test]
fn inclusive_hits_both_ends() {
    let pts = linspace_inclusive(-1.0, 1.0, 5).unwrap();
    assert_eq!(pts.len(), 5);
    assert_eq!(pts[0], -1.0);
    assert_relative_eq!(pts[4], 1.0, epsilon = 1e-12);
    assert_relative_eq!(pts[2], 0.0, epsilon = 1e-12);

    let pts = linspace_inclusive(0.0, 0.3, 7).unwrap();
    assert_eq!(pts.len(), 7);
    assert_relative_eq!(*pts.last().unwrap(), 0.3, epsilon = 1e-12);
}

#[test]
fn degenerate_counts() {
    assert!(linspace(0.0, 1.0, 0).unwrap().is_empty());
    assert!(linspace_inclusive(0.0, 1.0, 0).unwrap().is_empty());
    assert_eq!(linspace_inclusive(4.0, 9.0, 1).unwrap(), vec![4.0]);
}

#[test]
fn max_below_min_is_rejected() {
    let err = linspace(2.0, 1.0, 3).unwrap_err();
    assert!(matches!(err, PlotError::InvalidBounds { min, max } if min == 2.0 && max == 1.0));
    assert!(linspace_inclusive(2.0, 1.0, 3).is_err());
    assert!(generate(2.0, 1.0, 3, true).is_err());
}

#[test]
fn generate_dispatches_on_flag() {
    assert_eq!(generate(0.0, 4.0, 4, false).unwrap(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(generate(0.0, 3.0, 4, true).unwrap(), vec![0.0, 1.0, 2.0, 3.0]);
}
