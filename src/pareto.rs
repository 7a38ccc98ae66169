//! Dominance predicates and non-dominated sorting in minimization space.
//!
//! Every objective is minimized: a point is better when its coordinate is
//! smaller. The hypervolume algorithms use the predicates here to prune
//! limited point sets, and [`Population`](crate::population::Population)
//! uses [`pareto_front_indices`] to pick the first front out of a raw list
//! of fitness vectors.
//!
//! | Function | Purpose |
//! |---|---|
//! | [`dominates`] | Strict Pareto dominance |
//! | [`weakly_dominates`] | Dominance or equality |
//! | [`non_dominated_sort`] | Rank points into successive fronts (front 0, 1, …) |
//! | [`pareto_front_indices`] | Indices of the first front only |
//!
//! # Example
//!
//! ```
//! use hypervolume::pareto::{non_dominated_sort, pareto_front_indices};
//!
//! let points = vec![
//!     vec![1.0, 5.0], // Pareto-optimal
//!     vec![5.0, 1.0], // Pareto-optimal
//!     vec![3.0, 3.0], // Pareto-optimal
//!     vec![4.0, 4.0], // Dominated by (3, 3)
//! ];
//!
//! let fronts = non_dominated_sort(&points);
//! assert_eq!(fronts.len(), 2);
//!
//! let mut front = pareto_front_indices(&points);
//! front.sort_unstable();
//! assert_eq!(front, vec![0, 1, 2]);
//! ```

/// Returns `true` if `a` Pareto-dominates `b`.
///
/// `a` dominates `b` if it is no worse in every objective and strictly
/// better in at least one.
#[must_use]
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len());

    let mut strictly_better = false;
    for (&av, &bv) in a.iter().zip(b) {
        if av > bv {
            return false;
        }
        if av < bv {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Returns `true` if `a` is no worse than `b` in every objective.
///
/// Equal points weakly dominate each other.
#[must_use]
pub fn weakly_dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(&av, &bv)| av <= bv)
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// Returns `Vec<Vec<usize>>` where `fronts[0]` is the Pareto front and
/// each inner vec contains indices into `points`. Equal points land in
/// the same front.
///
/// Complexity: O(M * N^2) where M = objectives, N = points.
#[must_use]
pub fn non_dominated_sort(points: &[Vec<f64>]) -> Vec<Vec<usize>> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    // S_p: set of points dominated by p
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    // n_p: domination count for p
    let mut domination_count: Vec<usize> = vec![0; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(&points[i], &points[j]) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if dominates(&points[j], &points[i]) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current_front: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    while !current_front.is_empty() {
        let mut next_front: Vec<usize> = Vec::new();
        for &p in &current_front {
            for &q in &dominated_by[p] {
                domination_count[q] -= 1;
                if domination_count[q] == 0 {
                    next_front.push(q);
                }
            }
        }
        fronts.push(current_front);
        current_front = next_front;
    }

    fronts
}

/// Return the indices of the non-dominated points, in ascending order.
///
/// Equivalent to `non_dominated_sort(points)[0]`.
#[must_use]
pub fn pareto_front_indices(points: &[Vec<f64>]) -> Vec<usize> {
    non_dominated_sort(points)
        .into_iter()
        .next()
        .unwrap_or_default()
}
