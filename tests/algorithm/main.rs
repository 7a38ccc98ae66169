#![allow(clippy::cast_precision_loss)]

mod beume3d;
mod native2d;
mod wfg;

use hypervolume::FitnessVector;
use hypervolume::algorithm::HvAlgorithm;

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() < TOLERANCE * scale,
        "expected {expected}, got {actual}"
    );
}

/// `n` mutually non-dominated points on the simplex `sum(p) == 1`.
fn simplex_front(n: usize, d: usize, seed: u64) -> Vec<FitnessVector> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..n)
        .map(|_| {
            let raw: Vec<f64> = (0..d).map(|_| rng.f64() + 1e-3).collect();
            let sum: f64 = raw.iter().sum();
            raw.into_iter().map(|v| v / sum).collect()
        })
        .collect()
}

/// `n` uniform points in `[0, 1)^d`, dominated ones included.
fn uniform_cloud(n: usize, d: usize, seed: u64) -> Vec<FitnessVector> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..n).map(|_| (0..d).map(|_| rng.f64()).collect()).collect()
}

/// Total and all contributions of `points` by `algorithm`, each on a fresh copy.
fn evaluate(
    algorithm: &dyn HvAlgorithm,
    points: &[FitnessVector],
    reference: &[f64],
) -> (f64, Vec<f64>) {
    let total = algorithm.compute(&mut points.to_vec(), reference);
    let contributions = algorithm.contributions(&mut points.to_vec(), reference);
    (total, contributions)
}

/// Checks that `algorithm` agrees with `oracle` on total and contributions,
/// and that contributions match the removal difference.
fn assert_agrees(
    algorithm: &dyn HvAlgorithm,
    oracle: &dyn HvAlgorithm,
    points: &[FitnessVector],
    reference: &[f64],
) {
    let (total, contributions) = evaluate(algorithm, points, reference);
    let (expected_total, expected_contributions) = evaluate(oracle, points, reference);
    assert_close(total, expected_total);
    assert_eq!(contributions.len(), points.len());
    for (c, e) in contributions.iter().zip(&expected_contributions) {
        assert_close(*c, *e);
    }

    let sum: f64 = contributions.iter().sum();
    assert!(sum <= total + TOLERANCE);
    for (i, c) in contributions.iter().enumerate() {
        let mut rest = points.to_vec();
        rest.remove(i);
        let without = oracle.compute(&mut rest, reference);
        assert_close(*c, expected_total - without);
    }
}

/// Inclusion-exclusion over every subset. Exponential in `n`, so only for
/// small sets.
#[derive(Debug)]
struct InclusionExclusion;

impl HvAlgorithm for InclusionExclusion {
    fn name(&self) -> &'static str {
        "inclusion-exclusion"
    }

    fn compute(&self, points: &mut [FitnessVector], reference: &[f64]) -> f64 {
        let n = points.len();
        assert!(n <= 16, "inclusion-exclusion is limited to 16 points");
        let mut total = 0.0;
        for mask in 1_u32..(1 << n) {
            let mut corner = vec![f64::NEG_INFINITY; reference.len()];
            for (i, p) in points.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    for (c, &v) in corner.iter_mut().zip(p) {
                        *c = c.max(v);
                    }
                }
            }
            let volume: f64 = corner
                .iter()
                .zip(reference)
                .map(|(&c, &r)| (r - c).max(0.0))
                .product();
            if mask.count_ones() % 2 == 1 {
                total += volume;
            } else {
                total -= volume;
            }
        }
        total
    }
}

#[test]
fn test_inclusion_exclusion_oracle() {
    let mut points = vec![vec![1.0, 5.0], vec![5.0, 1.0]];
    assert_close(InclusionExclusion.compute(&mut points, &[6.0, 6.0]), 9.0);
}
