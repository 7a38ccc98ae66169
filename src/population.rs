//! The narrow view of a population that a [`Hypervolume`](crate::Hypervolume)
//! needs at construction time.
//!
//! A population only has to expose per-individual fitness vectors. The
//! first Pareto front is computed by the provided
//! [`pareto_front_indices`](Population::pareto_front_indices) method;
//! implementors that already track their fronts can override it.

use crate::FitnessVector;

/// A collection of individuals with fitness vectors (minimization).
///
/// # Implementing for your own population type
///
/// ```
/// use hypervolume::Hypervolume;
/// use hypervolume::population::Population;
///
/// struct Swarm {
///     fitness: Vec<Vec<f64>>,
/// }
///
/// impl Population for Swarm {
///     fn n_individuals(&self) -> usize {
///         self.fitness.len()
///     }
///
///     fn fitness(&self, index: usize) -> &[f64] {
///         &self.fitness[index]
///     }
/// }
///
/// let swarm = Swarm {
///     fitness: vec![vec![1.0, 3.0], vec![3.0, 1.0], vec![4.0, 4.0]],
/// };
/// let hv = Hypervolume::from_population(&swarm, true).unwrap();
/// assert_eq!(hv.n_points(), 2);
/// ```
pub trait Population {
    /// Returns the number of individuals.
    fn n_individuals(&self) -> usize;

    /// Returns the fitness vector of the individual at `index`.
    fn fitness(&self, index: usize) -> &[f64];

    /// Returns the indices of the individuals on the first Pareto front.
    fn pareto_front_indices(&self) -> Vec<usize> {
        let values: Vec<FitnessVector> = (0..self.n_individuals())
            .map(|i| self.fitness(i).to_vec())
            .collect();
        crate::pareto::pareto_front_indices(&values)
    }
}

impl Population for [FitnessVector] {
    fn n_individuals(&self) -> usize {
        self.len()
    }

    fn fitness(&self, index: usize) -> &[f64] {
        &self[index]
    }

    fn pareto_front_indices(&self) -> Vec<usize> {
        crate::pareto::pareto_front_indices(self)
    }
}

impl Population for Vec<FitnessVector> {
    fn n_individuals(&self) -> usize {
        self.len()
    }

    fn fitness(&self, index: usize) -> &[f64] {
        &self[index]
    }

    fn pareto_front_indices(&self) -> Vec<usize> {
        crate::pareto::pareto_front_indices(self)
    }
}
