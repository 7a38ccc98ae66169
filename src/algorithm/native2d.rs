//! Closed-form sweep for two objectives.
//!
//! Points are sorted by the first objective (ties by the second) and
//! walked left to right. Each point that lowers the running minimum of the
//! second objective opens a horizontal strip reaching to the reference
//! point; these points form the *staircase*. Every other point is weakly
//! dominated by the staircase point before it.

use core::cmp::Ordering;

use super::{HvAlgorithm, verify_dimension, verify_reference_bounds};
use crate::FitnessVector;
use crate::error::Result;

/// Hypervolume for exactly two objectives in O(n log n).
///
/// Exclusive contributions of all points are computed together in one
/// O(n log n) pass. Points weakly dominated by another point (including
/// duplicates) contribute zero.
///
/// # Tie-breaking
///
/// [`least_contributor`](HvAlgorithm::least_contributor) and
/// [`greatest_contributor`](HvAlgorithm::greatest_contributor) return the
/// lowest original index among points with equal contributions.
///
/// # Examples
///
/// ```
/// use hypervolume::algorithm::{HvAlgorithm, Native2d};
///
/// let mut points = vec![vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]];
/// let hv = Native2d::new().compute(&mut points, &[4.0, 4.0]);
/// assert!((hv - 6.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Native2d;

impl Native2d {
    /// Creates the 2-D algorithm.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HvAlgorithm for Native2d {
    fn name(&self) -> &'static str {
        "native2d"
    }

    fn verify_before_compute(&self, points: &[FitnessVector], reference: &[f64]) -> Result<()> {
        verify_dimension(self.name(), 2, reference)?;
        verify_reference_bounds(points, reference)
    }

    /// Sorts `points` in place.
    fn compute(&self, points: &mut [FitnessVector], reference: &[f64]) -> f64 {
        sweep(points, reference)
    }

    fn exclusive(&self, index: usize, points: &mut [FitnessVector], reference: &[f64]) -> f64 {
        contributions(points, reference)[index]
    }

    fn contributions(&self, points: &mut [FitnessVector], reference: &[f64]) -> Vec<f64> {
        contributions(points, reference)
    }
}

/// Sort order of the sweep: first objective, then second.
fn by_first_then_second(a: &[f64], b: &[f64]) -> Ordering {
    a[0].total_cmp(&b[0]).then_with(|| a[1].total_cmp(&b[1]))
}

/// Area dominated by `points` inside the box bounded by `reference`.
///
/// Only the first two coordinates are read. Sorts `points` in place.
pub(crate) fn sweep(points: &mut [FitnessVector], reference: &[f64]) -> f64 {
    points.sort_by(|a, b| by_first_then_second(a, b));
    strip_area(points.iter().map(Vec::as_slice), reference[0], reference[1])
}

/// Sums the horizontal strips opened by already-sorted points below `ceiling`
/// and left of `right`.
fn strip_area<'a>(sorted: impl Iterator<Item = &'a [f64]>, right: f64, mut ceiling: f64) -> f64 {
    let mut area = 0.0;
    for p in sorted {
        if p[0] < right && p[1] < ceiling {
            area += (right - p[0]) * (ceiling - p[1]);
            ceiling = p[1];
        }
    }
    area
}

/// Exclusive contribution of every point, in the order of `points`.
///
/// A staircase point `s_k` alone covers the rectangle between its
/// neighbours on the staircase, `[x_k, x_{k+1}) x [y_k, y_{k-1})`. The only
/// other points reaching into that rectangle are those it weakly
/// dominates and that come before `s_{k+1}` in sweep order, so they are
/// collected per step and their union inside the rectangle is subtracted.
fn contributions(points: &[FitnessVector], reference: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| by_first_then_second(&points[a], &points[b]));

    let mut steps: Vec<usize> = Vec::new();
    let mut followers: Vec<Vec<usize>> = Vec::new();
    let mut ceiling = reference[1];
    for &i in &order {
        let p = &points[i];
        if p[0] >= reference[0] {
            // This and every later point have an empty box.
            break;
        }
        if p[1] < ceiling {
            steps.push(i);
            followers.push(Vec::new());
            ceiling = p[1];
        } else if let Some(bucket) = followers.last_mut() {
            bucket.push(i);
        }
    }

    let mut result = vec![0.0; points.len()];
    for (k, &i) in steps.iter().enumerate() {
        let p = &points[i];
        let right = steps.get(k + 1).map_or(reference[0], |&j| points[j][0]);
        let top = if k == 0 {
            reference[1]
        } else {
            points[steps[k - 1]][1]
        };
        let rectangle = (right - p[0]) * (top - p[1]);
        let covered = strip_area(
            followers[k].iter().map(|&j| points[j].as_slice()),
            right,
            top,
        );
        result[i] = rectangle - covered;
    }
    result
}
