//! WFG: recursive slicing for any number of objectives (While, Bradstreet
//! and Barone, 2012).
//!
//! The hypervolume of a set is the sum, over its points in some order, of
//! each point's volume exclusive of the points after it. The exclusive
//! volume of `p` is its box minus the hypervolume of the later points
//! *limited* to that box (coordinate-wise maximum with `p`), which is a
//! smaller instance of the same problem.
//!
//! Sorting worst-first on the last objective makes every limited point
//! share `p`'s last coordinate, so the recursion drops one dimension per
//! level until the 2-D sweep (or the 3-D sweep) takes over.

use super::{HvAlgorithm, beume3d, box_volume, native2d, verify_reference_bounds};
use crate::FitnessVector;
use crate::error::{Error, Result};
use crate::pareto::weakly_dominates;

/// Hypervolume for any number of objectives.
///
/// The running time is exponential in the number of objectives in the
/// worst case. Limited sets are pruned of weakly dominated points,
/// duplicates, and points with an empty box before each recursive step,
/// and a point whose box is already covered by a later point is skipped
/// without recursing.
///
/// The stop dimension picks where the recursion hands off: 2 (default)
/// uses the closed-form 2-D sweep, 3 uses the 3-D sweep of
/// [`Beume3d`](super::Beume3d).
///
/// # Tie-breaking
///
/// Exclusive contributions are evaluated in the caller's point order and
/// [`least_contributor`](HvAlgorithm::least_contributor) /
/// [`greatest_contributor`](HvAlgorithm::greatest_contributor) return the
/// lowest index among equal contributions.
///
/// # Examples
///
/// ```
/// use hypervolume::algorithm::{HvAlgorithm, Wfg};
///
/// let mut points = vec![
///     vec![1.0, 2.0, 3.0, 4.0],
///     vec![4.0, 3.0, 2.0, 1.0],
/// ];
/// let hv = Wfg::new().compute(&mut points, &[5.0, 5.0, 5.0, 5.0]);
/// // 24 + 24 - 1*2*2*1
/// assert!((hv - 44.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Wfg {
    stop_dimension: usize,
}

impl Default for Wfg {
    fn default() -> Self {
        Self { stop_dimension: 2 }
    }
}

impl Wfg {
    /// Creates a WFG algorithm that recurses down to two objectives.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a WFG algorithm that hands off to a dedicated sweep at
    /// `stop_dimension` objectives.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStopDimension` unless `stop_dimension` is 2 or 3.
    pub fn with_stop_dimension(stop_dimension: usize) -> Result<Self> {
        if !(2..=3).contains(&stop_dimension) {
            return Err(Error::InvalidStopDimension(stop_dimension));
        }
        Ok(Self { stop_dimension })
    }

    /// Returns the dimension at which the recursion stops.
    #[must_use]
    pub fn stop_dimension(&self) -> usize {
        self.stop_dimension
    }

    /// Hypervolume of `points`, all of which have `reference.len()` coordinates.
    ///
    /// Reorders `points`. `frames` provides scratch space for the deeper
    /// recursion levels.
    fn volume(
        self,
        points: &mut [FitnessVector],
        reference: &[f64],
        frames: &mut [Frame],
    ) -> f64 {
        let d = reference.len();
        match points.len() {
            0 => return 0.0,
            1 => return box_volume(&points[0], reference),
            _ => {}
        }
        if d < 2 {
            return points
                .iter()
                .map(|p| box_volume(p, reference))
                .fold(0.0, f64::max);
        }
        if d == 2 {
            return native2d::sweep(points, reference);
        }
        if d == 3 && self.stop_dimension == 3 {
            return beume3d::sweep(points, reference);
        }

        let Some((frame, deeper)) = frames.split_first_mut() else {
            return self.volume(points, reference, &mut Frame::stack(d));
        };

        let last = d - 1;
        points.sort_by(|a, b| b[last].total_cmp(&a[last]));
        let slice_reference = &reference[..last];

        let mut total = 0.0;
        for k in 0..points.len() {
            let p = &points[k];
            let depth = reference[last] - p[last];
            if depth <= 0.0 {
                continue;
            }
            let base = box_volume(&p[..last], slice_reference);
            if base <= 0.0 || !frame.limit(p, &points[k + 1..], slice_reference) {
                continue;
            }
            let covered = self.volume(frame.active_mut(), slice_reference, deeper);
            total += depth * (base - covered);
        }
        total
    }

    /// `points[index]`'s box volume minus the volume of the other points
    /// limited to that box.
    fn exclusive_in(
        self,
        index: usize,
        points: &[FitnessVector],
        reference: &[f64],
        frames: &mut [Frame],
    ) -> f64 {
        let p = &points[index];
        let inclusive = box_volume(p, reference);
        if inclusive <= 0.0 {
            return 0.0;
        }
        let Some((frame, deeper)) = frames.split_first_mut() else {
            let mut frames = Frame::stack(reference.len());
            return self.exclusive_in(index, points, reference, &mut frames);
        };

        let others = points
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != index)
            .map(|(_, q)| q);
        if !frame.limit(p, others, reference) {
            return 0.0;
        }
        inclusive - self.volume(frame.active_mut(), reference, deeper)
    }
}

impl HvAlgorithm for Wfg {
    fn name(&self) -> &'static str {
        "wfg"
    }

    fn verify_before_compute(&self, points: &[FitnessVector], reference: &[f64]) -> Result<()> {
        verify_reference_bounds(points, reference)
    }

    /// Sorts `points` in place.
    fn compute(&self, points: &mut [FitnessVector], reference: &[f64]) -> f64 {
        trace_debug!(
            n_points = points.len(),
            dimension = reference.len(),
            "wfg recursion"
        );
        self.volume(points, reference, &mut Frame::stack(reference.len()))
    }

    fn exclusive(&self, index: usize, points: &mut [FitnessVector], reference: &[f64]) -> f64 {
        self.exclusive_in(index, points, reference, &mut Frame::stack(reference.len()))
    }

    fn contributions(&self, points: &mut [FitnessVector], reference: &[f64]) -> Vec<f64> {
        let mut frames = Frame::stack(reference.len());
        (0..points.len())
            .map(|i| self.exclusive_in(i, points, reference, &mut frames))
            .collect()
    }
}

/// Scratch storage for the limited set of one recursion level.
///
/// Point buffers are kept across uses; only the first `len` are live.
#[derive(Debug, Default)]
struct Frame {
    points: Vec<FitnessVector>,
    len: usize,
}

impl Frame {
    /// One frame per possible recursion level below `dimension`.
    fn stack(dimension: usize) -> Vec<Frame> {
        (0..dimension).map(|_| Frame::default()).collect()
    }

    fn active_mut(&mut self) -> &mut [FitnessVector] {
        &mut self.points[..self.len]
    }

    /// Fills the frame with `max(point, q)` for every `q` in `others`,
    /// truncated to `reference.len()` coordinates, and prunes it to its
    /// non-dominated part.
    ///
    /// Returns `false` when some `q` weakly dominates `point`, in which case
    /// `point` has no exclusive volume and the frame contents are
    /// meaningless.
    fn limit<'a>(
        &mut self,
        point: &[f64],
        others: impl IntoIterator<Item = &'a FitnessVector>,
        reference: &[f64],
    ) -> bool {
        let dim = reference.len();
        let point = &point[..dim];
        self.len = 0;
        for q in others {
            let q = &q[..dim];
            if weakly_dominates(q, point) {
                return false;
            }
            if self.len == self.points.len() {
                self.points.push(Vec::with_capacity(dim));
            }
            let slot = &mut self.points[self.len];
            slot.clear();
            slot.extend(point.iter().zip(q).map(|(&a, &b)| a.max(b)));
            if slot.iter().zip(reference).all(|(&v, &r)| v < r) {
                self.len += 1;
            }
        }
        self.retain_non_dominated();
        true
    }

    /// Keeps only the live points no other live point weakly dominates,
    /// and one copy of each duplicate.
    fn retain_non_dominated(&mut self) {
        let points = &mut self.points[..self.len];
        let mut kept = 0;
        for i in 0..points.len() {
            if (0..kept).any(|j| weakly_dominates(&points[j], &points[i])) {
                continue;
            }
            let mut j = 0;
            while j < kept {
                if weakly_dominates(&points[i], &points[j]) {
                    kept -= 1;
                    points.swap(j, kept);
                } else {
                    j += 1;
                }
            }
            points.swap(kept, i);
            kept += 1;
        }
        self.len = kept;
    }
}
