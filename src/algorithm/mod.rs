//! Hypervolume algorithms and the trait they share.
//!
//! Every algorithm implements [`HvAlgorithm`]. They differ in which
//! dimensions they accept and how fast they are:
//!
//! | Algorithm | Objectives | Total hypervolume | All contributions |
//! |-----------|------------|-------------------|-------------------|
//! | [`Native2d`] | 2 | O(n log n) sweep | O(n log n) staircase buckets |
//! | [`Beume3d`] | 3 | O(n log n) sweep over a balanced staircase | O(n² log n) |
//! | [`Wfg`] | any ≥ 2 | exponential in d (worst case) | n WFG passes |
//!
//! [`Hypervolume`](crate::Hypervolume) picks one by dimension when none is
//! given; see [`default_for_dimension`].
//!
//! # Mutation contract
//!
//! Algorithms receive the point set as `&mut [FitnessVector]` and may
//! reorder it. Contributions are always reported against the order the
//! slice had on entry.

mod beume3d;
mod native2d;
mod wfg;

pub use beume3d::Beume3d;
pub use native2d::Native2d;
pub use wfg::Wfg;

use core::cmp::Ordering;

use crate::FitnessVector;
use crate::error::{Error, Result};

/// A hypervolume computation strategy.
///
/// Implementations carry no mutable state between calls, so one instance
/// can be shared by any number of callers (`Send + Sync`). All methods
/// assume the caller has already checked that every point and the
/// reference point have the same dimension; [`verify_before_compute`]
/// only checks what is specific to the algorithm.
///
/// [`verify_before_compute`]: HvAlgorithm::verify_before_compute
///
/// # Implementing a custom algorithm
///
/// Only [`compute`](HvAlgorithm::compute) is needed to get a working
/// algorithm; the remaining methods have definitions in terms of it.
///
/// ```
/// use hypervolume::algorithm::HvAlgorithm;
/// use hypervolume::{FitnessVector, Hypervolume};
///
/// /// Hypervolume of a single box, ignoring every point but the first.
/// #[derive(Debug)]
/// struct FirstOnly;
///
/// impl HvAlgorithm for FirstOnly {
///     fn name(&self) -> &'static str {
///         "first-only"
///     }
///
///     fn compute(&self, points: &mut [FitnessVector], reference: &[f64]) -> f64 {
///         points.first().map_or(0.0, |p| {
///             p.iter().zip(reference).map(|(&a, &r)| r - a).product()
///         })
///     }
/// }
///
/// let hv = Hypervolume::new(vec![vec![1.0, 1.0]]).unwrap();
/// assert_eq!(hv.compute_with(&[3.0, 3.0], &FirstOnly).unwrap(), 4.0);
/// ```
pub trait HvAlgorithm: Send + Sync + core::fmt::Debug {
    /// Short name used in errors and log events.
    fn name(&self) -> &'static str;

    /// Computes the hypervolume of `points` bounded by `reference`.
    fn compute(&self, points: &mut [FitnessVector], reference: &[f64]) -> f64;

    /// Checks algorithm-specific preconditions.
    ///
    /// The default requires every point to lie inside the box bounded by
    /// the reference point (`p[i] <= r[i]` for every objective).
    ///
    /// # Errors
    ///
    /// Returns `ReferencePointNotDominated` for the first point outside the box.
    fn verify_before_compute(&self, points: &[FitnessVector], reference: &[f64]) -> Result<()> {
        verify_reference_bounds(points, reference)
    }

    /// Computes the volume dominated by `points[index]` and by no other point.
    ///
    /// The default removes the point and subtracts the hypervolume of the
    /// rest from the total.
    fn exclusive(&self, index: usize, points: &mut [FitnessVector], reference: &[f64]) -> f64 {
        let mut rest: Vec<FitnessVector> = points.to_vec();
        rest.remove(index);
        self.compute(points, reference) - self.compute(&mut rest, reference)
    }

    /// Computes the exclusive contribution of every point, index-aligned
    /// with `points` as passed in.
    fn contributions(&self, points: &mut [FitnessVector], reference: &[f64]) -> Vec<f64> {
        let original = points.to_vec();
        (0..original.len())
            .map(|i| {
                let mut scratch = original.clone();
                self.exclusive(i, &mut scratch, reference)
            })
            .collect()
    }

    /// Returns the index of the point with the smallest exclusive contribution.
    ///
    /// The default scans [`contributions`](HvAlgorithm::contributions) in
    /// index order and keeps the first minimum.
    ///
    /// `points` must be non-empty; on an empty slice the default returns 0,
    /// which is not a valid index.
    fn least_contributor(&self, points: &mut [FitnessVector], reference: &[f64]) -> usize {
        index_of_min(&self.contributions(points, reference))
    }

    /// Returns the index of the point with the largest exclusive contribution.
    ///
    /// The default scans [`contributions`](HvAlgorithm::contributions) in
    /// index order and keeps the first maximum.
    ///
    /// `points` must be non-empty; on an empty slice the default returns 0,
    /// which is not a valid index.
    fn greatest_contributor(&self, points: &mut [FitnessVector], reference: &[f64]) -> usize {
        index_of_max(&self.contributions(points, reference))
    }
}

/// Returns the algorithm [`Hypervolume`](crate::Hypervolume) uses when none
/// is given: [`Native2d`] for 2 objectives, [`Beume3d`] for 3, and [`Wfg`]
/// otherwise.
#[must_use]
pub fn default_for_dimension(dimension: usize) -> Box<dyn HvAlgorithm> {
    trace_debug!(dimension, "selecting default hypervolume algorithm");
    match dimension {
        2 => Box::new(Native2d::new()),
        3 => Box::new(Beume3d::new()),
        _ => Box::new(Wfg::new()),
    }
}

/// Fails unless every point satisfies `p[i] <= reference[i]` in every objective.
///
/// A point equal to the reference point passes (its volume is zero). NaN
/// coordinates fail.
pub(crate) fn verify_reference_bounds(points: &[FitnessVector], reference: &[f64]) -> Result<()> {
    for (point_index, p) in points.iter().enumerate() {
        let outside = p.iter().zip(reference).position(|(&v, &r)| {
            !matches!(v.partial_cmp(&r), Some(Ordering::Less | Ordering::Equal))
        });
        if let Some(objective) = outside {
            return Err(Error::ReferencePointNotDominated {
                point_index,
                objective,
            });
        }
    }
    Ok(())
}

/// Fails unless `reference` has exactly `expected` objectives.
pub(crate) fn verify_dimension(
    algorithm: &'static str,
    expected: usize,
    reference: &[f64],
) -> Result<()> {
    if reference.len() == expected {
        Ok(())
    } else {
        Err(Error::UnsupportedDimension {
            algorithm,
            expected,
            got: reference.len(),
        })
    }
}

/// Volume of the box spanned by `point` and `reference`, zero if empty.
pub(crate) fn box_volume(point: &[f64], reference: &[f64]) -> f64 {
    point
        .iter()
        .zip(reference)
        .map(|(&p, &r)| (r - p).max(0.0))
        .product()
}

/// Index of the first minimum, 0 for an empty slice. NaN entries are never selected unless all are NaN.
pub(crate) fn index_of_min(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < values[best] || (values[best].is_nan() && !v.is_nan()) {
            best = i;
        }
    }
    best
}

/// Index of the first maximum, 0 for an empty slice. NaN entries are never selected unless all are NaN.
pub(crate) fn index_of_max(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] || (values[best].is_nan() && !v.is_nan()) {
            best = i;
        }
    }
    best
}
