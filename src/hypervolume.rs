//! The [`Hypervolume`] facade: a validated point set plus dispatch to an
//! [`HvAlgorithm`].

use parking_lot::RwLock;

use crate::FitnessVector;
use crate::algorithm::{self, HvAlgorithm};
use crate::error::{Error, Result};
use crate::population::Population;

/// A point set (minimization) whose hypervolume can be queried against
/// any reference point.
///
/// Each query validates its input (unless verification is turned off),
/// picks an algorithm by dimension (unless one is passed to a `*_with`
/// method), and runs it.
///
/// # Copying points
///
/// Algorithms are allowed to reorder the points they are given. By
/// default every query works on a private copy, so repeated and
/// concurrent queries see the same set. [`set_copy_points(false)`] skips
/// that copy and lets the algorithm work on the stored set directly;
/// after such a query the stored order is unspecified, which can change
/// later contributor indices. In-place queries on one instance are
/// serialized by an internal lock.
///
/// [`set_copy_points(false)`]: Hypervolume::set_copy_points
///
/// # Examples
///
/// ```
/// use hypervolume::Hypervolume;
///
/// let hv = Hypervolume::new(vec![vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]]).unwrap();
/// let reference = [4.0, 4.0];
///
/// assert!((hv.compute(&reference).unwrap() - 6.0).abs() < 1e-12);
/// assert!((hv.exclusive(1, &reference).unwrap() - 1.0).abs() < 1e-12);
/// assert_eq!(hv.least_contributor(&reference).unwrap(), 0);
/// ```
#[derive(Debug)]
pub struct Hypervolume {
    points: RwLock<Vec<FitnessVector>>,
    copy_points: bool,
    verify: bool,
}

impl Clone for Hypervolume {
    fn clone(&self) -> Self {
        Self {
            points: RwLock::new(self.points.read().clone()),
            copy_points: self.copy_points,
            verify: self.verify,
        }
    }
}

impl Hypervolume {
    /// Creates a hypervolume over `points`, with verification on.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPointSet` if `points` is empty, `DimensionTooSmall` if
    /// the points have fewer than two objectives, and `DimensionMismatch`
    /// if their dimensions differ.
    pub fn new(points: Vec<FitnessVector>) -> Result<Self> {
        Self::with_verify(points, true)
    }

    /// Creates a hypervolume over `points`.
    ///
    /// When `verify` is `false` the point set is not checked, and neither
    /// are the reference points and algorithm preconditions of later
    /// queries (see [`set_verify`](Self::set_verify)).
    ///
    /// # Errors
    ///
    /// With `verify` on, the same errors as [`new`](Self::new).
    pub fn with_verify(points: Vec<FitnessVector>, verify: bool) -> Result<Self> {
        if verify {
            verify_point_set(&points)?;
        }
        Ok(Self {
            points: RwLock::new(points),
            copy_points: true,
            verify,
        })
    }

    /// Creates a hypervolume over the first Pareto front of `population`.
    ///
    /// # Errors
    ///
    /// With `verify` on, the same errors as [`new`](Self::new), checked on
    /// the extracted front.
    pub fn from_population<P: Population + ?Sized>(population: &P, verify: bool) -> Result<Self> {
        let points = population
            .pareto_front_indices()
            .into_iter()
            .map(|i| population.fitness(i).to_vec())
            .collect();
        Self::with_verify(points, verify)
    }

    /// Sets whether queries work on a private copy of the points.
    ///
    /// Turning this off saves one allocation per query, at the cost of
    /// letting algorithms reorder the stored set.
    pub fn set_copy_points(&mut self, copy_points: bool) {
        self.copy_points = copy_points;
    }

    /// Returns whether queries work on a private copy of the points.
    #[must_use]
    pub fn copy_points(&self) -> bool {
        self.copy_points
    }

    /// Sets whether queries validate the reference point and the
    /// algorithm's preconditions before running.
    pub fn set_verify(&mut self, verify: bool) {
        self.verify = verify;
    }

    /// Returns whether queries validate their input.
    #[must_use]
    pub fn verify(&self) -> bool {
        self.verify
    }

    /// Returns a copy of the stored points.
    #[must_use]
    pub fn points(&self) -> Vec<FitnessVector> {
        self.points.read().clone()
    }

    /// Returns the number of stored points.
    #[must_use]
    pub fn n_points(&self) -> usize {
        self.points.read().len()
    }

    /// Returns the algorithm used when none is given: 2-D sweep for two
    /// objectives, 3-D sweep for three, WFG otherwise.
    #[must_use]
    pub fn default_algorithm(reference: &[f64]) -> Box<dyn HvAlgorithm> {
        algorithm::default_for_dimension(reference.len())
    }

    /// Rough number of elementary operations for `n` points in `d`
    /// objectives, for comparing workloads.
    ///
    /// `2 n ln n` for two objectives, `3 n ln n` for three, and
    /// `n ln n * n^(d/2)` (integer `d/2`) otherwise. The last case is a
    /// placeholder, not a bound on WFG.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn estimated_operations(n: usize, d: usize) -> u64 {
        let n = n as f64;
        let n_log_n = n * n.ln();
        let operations = match d {
            2 => 2.0 * n_log_n,
            3 => 3.0 * n_log_n,
            _ => n_log_n * n.powi(i32::try_from(d / 2).unwrap_or(i32::MAX)),
        };
        // NaN (n = 0) saturates to 0.
        operations as u64
    }

    /// Returns the coordinate-wise maximum of the points plus `epsilon`.
    ///
    /// With `epsilon > 0` every stored point lies strictly inside the box
    /// bounded by the result, which makes it a valid reference point.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPointSet` if there are no points.
    pub fn nadir_point(&self, epsilon: f64) -> Result<FitnessVector> {
        let points = self.points.read();
        let (first, rest) = points.split_first().ok_or(Error::EmptyPointSet)?;
        let mut nadir = first.clone();
        for p in rest {
            for (n, &v) in nadir.iter_mut().zip(p) {
                *n = n.max(v);
            }
        }
        for n in &mut nadir {
            *n += epsilon;
        }
        Ok(nadir)
    }

    /// Computes the hypervolume with the default algorithm.
    ///
    /// # Errors
    ///
    /// With verification on, returns `ReferenceDimensionMismatch` if the
    /// reference point has the wrong dimension, and
    /// `ReferencePointNotDominated` if some point lies outside its box.
    pub fn compute(&self, reference: &[f64]) -> Result<f64> {
        self.compute_with(reference, Self::default_algorithm(reference).as_ref())
    }

    /// Computes the hypervolume with `algorithm`.
    ///
    /// # Errors
    ///
    /// Same as [`compute`](Self::compute), plus whatever `algorithm`'s
    /// precondition check returns.
    pub fn compute_with(&self, reference: &[f64], algorithm: &dyn HvAlgorithm) -> Result<f64> {
        self.dispatch("compute", reference, algorithm, |points| {
            algorithm.compute(points, reference)
        })
    }

    /// Computes the volume dominated only by the point at `index`, with the
    /// default algorithm.
    ///
    /// # Errors
    ///
    /// Same as [`compute`](Self::compute), plus `IndexOutOfRange` (checked
    /// even with verification off).
    pub fn exclusive(&self, index: usize, reference: &[f64]) -> Result<f64> {
        self.exclusive_with(index, reference, Self::default_algorithm(reference).as_ref())
    }

    /// Computes the volume dominated only by the point at `index`, with
    /// `algorithm`.
    ///
    /// # Errors
    ///
    /// Same as [`exclusive`](Self::exclusive).
    pub fn exclusive_with(
        &self,
        index: usize,
        reference: &[f64],
        algorithm: &dyn HvAlgorithm,
    ) -> Result<f64> {
        self.verify_inputs(reference, algorithm)?;
        let len = self.n_points();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(self.run("exclusive", reference, algorithm, |points| {
            algorithm.exclusive(index, points, reference)
        }))
    }

    /// Computes the exclusive contribution of every point with the default
    /// algorithm, index-aligned with [`points`](Self::points).
    ///
    /// # Errors
    ///
    /// Same as [`compute`](Self::compute).
    pub fn contributions(&self, reference: &[f64]) -> Result<Vec<f64>> {
        self.contributions_with(reference, Self::default_algorithm(reference).as_ref())
    }

    /// Computes the exclusive contribution of every point with `algorithm`.
    ///
    /// # Errors
    ///
    /// Same as [`compute_with`](Self::compute_with).
    pub fn contributions_with(
        &self,
        reference: &[f64],
        algorithm: &dyn HvAlgorithm,
    ) -> Result<Vec<f64>> {
        self.dispatch("contributions", reference, algorithm, |points| {
            algorithm.contributions(points, reference)
        })
    }

    /// Returns the index of the point with the smallest exclusive
    /// contribution, using the default algorithm.
    ///
    /// Ties resolve as documented on the algorithm.
    ///
    /// # Errors
    ///
    /// Same as [`compute`](Self::compute), plus `EmptyPointSet` (checked even
    /// with verification off).
    pub fn least_contributor(&self, reference: &[f64]) -> Result<usize> {
        self.least_contributor_with(reference, Self::default_algorithm(reference).as_ref())
    }

    /// Returns the index of the point with the smallest exclusive
    /// contribution, using `algorithm`.
    ///
    /// # Errors
    ///
    /// Same as [`least_contributor`](Self::least_contributor).
    pub fn least_contributor_with(
        &self,
        reference: &[f64],
        algorithm: &dyn HvAlgorithm,
    ) -> Result<usize> {
        self.verify_inputs(reference, algorithm)?;
        if self.n_points() == 0 {
            return Err(Error::EmptyPointSet);
        }
        Ok(self.run("least_contributor", reference, algorithm, |points| {
            algorithm.least_contributor(points, reference)
        }))
    }

    /// Returns the index of the point with the largest exclusive
    /// contribution, using the default algorithm.
    ///
    /// Ties resolve as documented on the algorithm.
    ///
    /// # Errors
    ///
    /// Same as [`least_contributor`](Self::least_contributor).
    pub fn greatest_contributor(&self, reference: &[f64]) -> Result<usize> {
        self.greatest_contributor_with(reference, Self::default_algorithm(reference).as_ref())
    }

    /// Returns the index of the point with the largest exclusive
    /// contribution, using `algorithm`.
    ///
    /// # Errors
    ///
    /// Same as [`least_contributor`](Self::least_contributor).
    pub fn greatest_contributor_with(
        &self,
        reference: &[f64],
        algorithm: &dyn HvAlgorithm,
    ) -> Result<usize> {
        self.verify_inputs(reference, algorithm)?;
        if self.n_points() == 0 {
            return Err(Error::EmptyPointSet);
        }
        Ok(self.run("greatest_contributor", reference, algorithm, |points| {
            algorithm.greatest_contributor(points, reference)
        }))
    }

    /// Verifies (when enabled), then runs `op`.
    fn dispatch<T>(
        &self,
        operation: &'static str,
        reference: &[f64],
        algorithm: &dyn HvAlgorithm,
        op: impl FnOnce(&mut [FitnessVector]) -> T,
    ) -> Result<T> {
        self.verify_inputs(reference, algorithm)?;
        Ok(self.run(operation, reference, algorithm, op))
    }

    /// Checks the reference point and the algorithm's preconditions when
    /// verification is on.
    fn verify_inputs(&self, reference: &[f64], algorithm: &dyn HvAlgorithm) -> Result<()> {
        if !self.verify {
            return Ok(());
        }
        let points = self.points.read();
        let result = verify_reference_dimension(&points, reference)
            .and_then(|()| algorithm.verify_before_compute(&points, reference));
        if result.is_err() {
            trace_info!(algorithm = algorithm.name(), ?result, "hypervolume input rejected");
        }
        result
    }

    /// Runs `op` on a private copy of the points, or on the stored points
    /// when copying is off.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn run<T>(
        &self,
        operation: &'static str,
        reference: &[f64],
        algorithm: &dyn HvAlgorithm,
        op: impl FnOnce(&mut [FitnessVector]) -> T,
    ) -> T {
        trace_debug!(
            operation,
            algorithm = algorithm.name(),
            n_points = self.n_points(),
            dimension = reference.len(),
            copy_points = self.copy_points,
            "dispatching hypervolume query"
        );
        if self.copy_points {
            let mut points = self.points.read().clone();
            op(&mut points)
        } else {
            let mut points = self.points.write();
            op(&mut points)
        }
    }
}

/// Checks that `points` is non-empty, has at least two objectives, and
/// has one dimension throughout.
fn verify_point_set(points: &[FitnessVector]) -> Result<()> {
    let first = points.first().ok_or(Error::EmptyPointSet)?;
    let expected = first.len();
    if expected <= 1 {
        return Err(Error::DimensionTooSmall {
            dimension: expected,
        });
    }
    if let Some((point_index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| p.len() != expected)
    {
        return Err(Error::DimensionMismatch {
            expected,
            got: p.len(),
            point_index,
        });
    }
    Ok(())
}

fn verify_reference_dimension(points: &[FitnessVector], reference: &[f64]) -> Result<()> {
    let expected = points.first().ok_or(Error::EmptyPointSet)?.len();
    if reference.len() != expected {
        return Err(Error::ReferenceDimensionMismatch {
            expected,
            got: reference.len(),
        });
    }
    Ok(())
}
