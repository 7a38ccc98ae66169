//! Stress and large-scale tests for the hypervolume algorithms.
//!
//! All tests are `#[ignore]`-gated so they don't run in normal CI.
//! Run with: `cargo test -- --ignored`

use hypervolume::Hypervolume;
use hypervolume::algorithm::{Beume3d, HvAlgorithm, Native2d, Wfg};

fn simplex_front(n: usize, d: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..n)
        .map(|_| {
            let raw: Vec<f64> = (0..d).map(|_| rng.f64() + 1e-3).collect();
            let sum: f64 = raw.iter().sum();
            raw.into_iter().map(|v| v / sum).collect()
        })
        .collect()
}

#[test]
#[ignore]
fn stress_native2d_many_points() {
    let points = simplex_front(100_000, 2, 1);
    let hv = Hypervolume::new(points).unwrap();
    let reference = [1.0, 1.0];
    let total = hv.compute(&reference).unwrap();
    assert!(total > 0.0 && total <= 1.0);
    let contributions = hv.contributions(&reference).unwrap();
    assert_eq!(contributions.len(), 100_000);
    assert!(contributions.iter().all(|&c| c >= -1e-12));
}

#[test]
#[ignore]
fn stress_beume3d_matches_wfg() {
    let points = simplex_front(2_000, 3, 2);
    let reference = [1.0, 1.0, 1.0];
    let beume = Beume3d::new().compute(&mut points.clone(), &reference);
    let wfg = Wfg::with_stop_dimension(3)
        .unwrap()
        .compute(&mut points.clone(), &reference);
    assert!((beume - wfg).abs() < 1e-9);
}

#[test]
#[ignore]
fn stress_wfg_high_dimension() {
    let points = simplex_front(100, 6, 3);
    let hv = Hypervolume::new(points).unwrap();
    let reference = [1.0; 6];
    let least = hv.least_contributor(&reference).unwrap();
    let greatest = hv.greatest_contributor(&reference).unwrap();
    let contributions = hv.contributions(&reference).unwrap();
    assert!(contributions[least] <= contributions[greatest]);
}

#[test]
#[ignore]
fn stress_in_place_queries() {
    let mut hv = Hypervolume::new(simplex_front(5_000, 2, 4)).unwrap();
    hv.set_copy_points(false);
    let reference = [1.0, 1.0];
    let first = hv.compute_with(&reference, &Native2d::new()).unwrap();
    for _ in 0..100 {
        let again = hv.compute(&reference).unwrap();
        assert!((again - first).abs() < 1e-12);
    }
}
