//! Sweep algorithm for three objectives (Beume et al., 2009).
//!
//! Points are visited in ascending order of the third objective. The
//! projection of everything seen so far onto the first two objectives is
//! kept as a staircase in a balanced tree, together with its area; the
//! volume grows by that area times the gap to the next point.

use core::cmp::Ordering;
use core::ops::Bound;
use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use super::{HvAlgorithm, box_volume, verify_dimension, verify_reference_bounds};
use crate::FitnessVector;
use crate::error::Result;
use crate::pareto::weakly_dominates;

/// Hypervolume for exactly three objectives in O(n log n).
///
/// The exclusive contribution of a point is its box volume minus the
/// volume of the other points limited to that box, each computed with the
/// same sweep, so all contributions together take O(n² log n).
///
/// # Tie-breaking
///
/// [`least_contributor`](HvAlgorithm::least_contributor) and
/// [`greatest_contributor`](HvAlgorithm::greatest_contributor) evaluate
/// points in their original order and return the lowest index among equal
/// contributions.
///
/// # Examples
///
/// ```
/// use hypervolume::algorithm::{Beume3d, HvAlgorithm};
///
/// let mut points = vec![vec![1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0]];
/// let hv = Beume3d::new().compute(&mut points, &[3.0, 3.0, 3.0]);
/// assert!((hv - 8.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Beume3d;

impl Beume3d {
    /// Creates the 3-D algorithm.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HvAlgorithm for Beume3d {
    fn name(&self) -> &'static str {
        "beume3d"
    }

    fn verify_before_compute(&self, points: &[FitnessVector], reference: &[f64]) -> Result<()> {
        verify_dimension(self.name(), 3, reference)?;
        verify_reference_bounds(points, reference)
    }

    /// Sorts `points` in place.
    fn compute(&self, points: &mut [FitnessVector], reference: &[f64]) -> f64 {
        sweep(points, reference)
    }

    fn exclusive(&self, index: usize, points: &mut [FitnessVector], reference: &[f64]) -> f64 {
        exclusive(index, points, reference, &mut Vec::new())
    }

    fn contributions(&self, points: &mut [FitnessVector], reference: &[f64]) -> Vec<f64> {
        let mut scratch = Vec::with_capacity(points.len());
        (0..points.len())
            .map(|i| exclusive(i, points, reference, &mut scratch))
            .collect()
    }
}

/// Volume dominated by `points` inside the box bounded by `reference`.
///
/// Only the first three coordinates are read. Sorts `points` in place.
pub(crate) fn sweep(points: &mut [FitnessVector], reference: &[f64]) -> f64 {
    points.sort_by(|a, b| a[2].total_cmp(&b[2]));

    let mut staircase = Staircase::new(reference[0], reference[1]);
    let mut volume = 0.0;
    let mut last_z = points.first().map_or(reference[2], |p| p[2]);
    for p in points.iter() {
        if p[2].partial_cmp(&reference[2]) != Some(Ordering::Less) {
            break;
        }
        volume += staircase.area * (p[2] - last_z);
        last_z = p[2];
        staircase.insert(p[0], p[1]);
    }
    if last_z < reference[2] {
        volume += staircase.area * (reference[2] - last_z);
    }
    volume
}

/// `points[index]`'s box volume minus the volume of the others limited to it.
fn exclusive(
    index: usize,
    points: &[FitnessVector],
    reference: &[f64],
    scratch: &mut Vec<FitnessVector>,
) -> f64 {
    let p = &points[index];
    let inclusive = box_volume(p, reference);
    if inclusive <= 0.0 {
        return 0.0;
    }

    scratch.clear();
    for (j, q) in points.iter().enumerate() {
        if j == index {
            continue;
        }
        if weakly_dominates(q, p) {
            return 0.0;
        }
        scratch.push(p.iter().zip(q).map(|(&a, &b)| a.max(b)).collect());
    }
    inclusive - sweep(scratch, reference)
}

/// Non-dominated 2-D points keyed by the first objective.
///
/// Along increasing keys the second objective strictly decreases.
#[derive(Debug)]
struct Staircase {
    steps: BTreeMap<OrderedFloat<f64>, f64>,
    area: f64,
    right: f64,
    top: f64,
}

impl Staircase {
    fn new(right: f64, top: f64) -> Self {
        Self {
            steps: BTreeMap::new(),
            area: 0.0,
            right,
            top,
        }
    }

    /// Adds `(x, y)`, dropping the steps it dominates and growing `area` by
    /// the part of its box not covered yet.
    fn insert(&mut self, x: f64, y: f64) {
        if !(x < self.right && y < self.top) {
            return;
        }
        // OrderedFloat compares -0.0 and 0.0 as equal, so both share one step.
        let key = OrderedFloat(x);

        // Height of the covered region at x.
        let mut ceiling = self
            .steps
            .range(..=key)
            .next_back()
            .map_or(self.top, |(_, &sy)| sy);
        if ceiling <= y {
            return;
        }

        let mut dominated: Vec<OrderedFloat<f64>> = Vec::new();
        let mut cursor = x;
        let mut blocked = false;
        for (&sx, &sy) in self.steps.range((Bound::Excluded(key), Bound::Unbounded)) {
            self.area += (sx.0 - cursor) * (ceiling - y);
            if sy < y {
                blocked = true;
                break;
            }
            dominated.push(sx);
            ceiling = sy;
            cursor = sx.0;
        }
        if !blocked {
            self.area += (self.right - cursor) * (ceiling - y);
        }

        for sx in dominated {
            self.steps.remove(&sx);
        }
        // Replaces a step at the same x, which is dominated when present.
        self.steps.insert(key, y);
    }
}
